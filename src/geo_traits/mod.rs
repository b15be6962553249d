//! Traits for accessing any of the supported geometry kinds through a borrowed view.
//!
//! Every dispatch in the codec and the formatter goes through [`GeometryType`], so adding a
//! kind to it forces every consumer to handle that kind.

use crate::datatypes::GeometryKind;
use crate::error::{GeometryError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// A borrowed geometry, resolved to its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryType<'a> {
    Point(&'a Point),
    LineString(&'a LineString),
    Polygon(&'a Polygon),
    MultiPoint(&'a MultiPoint),
    MultiLineString(&'a MultiLineString),
    MultiPolygon(&'a MultiPolygon),
    GeometryCollection(&'a GeometryCollection),
}

impl GeometryType<'_> {
    /// The kind of the borrowed geometry
    pub fn kind(&self) -> GeometryKind {
        match self {
            GeometryType::Point(_) => GeometryKind::Point,
            GeometryType::LineString(_) => GeometryKind::LineString,
            GeometryType::Polygon(_) => GeometryKind::Polygon,
            GeometryType::MultiPoint(_) => GeometryKind::MultiPoint,
            GeometryType::MultiLineString(_) => GeometryKind::MultiLineString,
            GeometryType::MultiPolygon(_) => GeometryKind::MultiPolygon,
            GeometryType::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }
}

/// A trait for accessing data from a generic Geometry.
pub trait GeometryTrait {
    /// Cast this geometry to a [`GeometryType`] enum, which allows for downcasting to a specific
    /// type
    fn as_type(&self) -> GeometryType<'_>;

    /// The runtime kind of this geometry
    fn kind(&self) -> GeometryKind {
        self.as_type().kind()
    }
}

/// A geometry type that a [`GeometryValue`](crate::value::GeometryValue) can be declared with.
///
/// Implemented by each of the seven kind-specific structs, and by [`Geometry`] itself, which
/// accepts every kind.
pub trait GeometryVariant: GeometryTrait + Sized {
    /// The kind this type is restricted to, or `None` when any kind is accepted.
    const KIND: Option<GeometryKind>;

    /// Narrow a decoded geometry to this type.
    ///
    /// Fails with [`GeometryError::TypeMismatch`] when the geometry is of another kind.
    fn try_from_geometry(geom: Geometry) -> Result<Self>;
}

impl GeometryTrait for Geometry {
    fn as_type(&self) -> GeometryType<'_> {
        match self {
            Geometry::Point(g) => GeometryType::Point(g),
            Geometry::LineString(g) => GeometryType::LineString(g),
            Geometry::Polygon(g) => GeometryType::Polygon(g),
            Geometry::MultiPoint(g) => GeometryType::MultiPoint(g),
            Geometry::MultiLineString(g) => GeometryType::MultiLineString(g),
            Geometry::MultiPolygon(g) => GeometryType::MultiPolygon(g),
            Geometry::GeometryCollection(g) => GeometryType::GeometryCollection(g),
        }
    }
}

impl GeometryVariant for Geometry {
    const KIND: Option<GeometryKind> = None;

    fn try_from_geometry(geom: Geometry) -> Result<Self> {
        Ok(geom)
    }
}

macro_rules! impl_variant {
    ($struct_name:ident) => {
        impl GeometryTrait for $struct_name {
            fn as_type(&self) -> GeometryType<'_> {
                GeometryType::$struct_name(self)
            }
        }

        impl GeometryVariant for $struct_name {
            const KIND: Option<GeometryKind> = Some(GeometryKind::$struct_name);

            fn try_from_geometry(geom: Geometry) -> Result<Self> {
                match geom {
                    Geometry::$struct_name(g) => Ok(g),
                    other => Err(GeometryError::TypeMismatch {
                        expected: GeometryKind::$struct_name,
                        actual: other.kind(),
                    }),
                }
            }
        }
    };
}

impl_variant!(Point);
impl_variant!(LineString);
impl_variant!(Polygon);
impl_variant!(MultiPoint);
impl_variant!(MultiLineString);
impl_variant!(MultiPolygon);
impl_variant!(GeometryCollection);

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, point};

    #[test]
    fn narrow_to_declared_kind() {
        let geom = Geometry::Point(point::p0());
        assert_eq!(Point::try_from_geometry(geom.clone()).unwrap(), point::p0());
        assert!(matches!(
            LineString::try_from_geometry(geom),
            Err(GeometryError::TypeMismatch {
                expected: GeometryKind::LineString,
                actual: GeometryKind::Point,
            })
        ));
    }

    #[test]
    fn generic_accepts_everything() {
        let geom = Geometry::LineString(linestring::ls0());
        assert_eq!(Geometry::try_from_geometry(geom.clone()).unwrap(), geom);
        assert_eq!(<Geometry as GeometryVariant>::KIND, None);
        assert_eq!(<Polygon as GeometryVariant>::KIND, Some(GeometryKind::Polygon));
    }

    #[test]
    fn kind_of_enum_matches_struct() {
        assert_eq!(
            Geometry::from(linestring::ls0()).kind(),
            linestring::ls0().kind()
        );
    }
}
