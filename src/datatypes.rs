//! The set of geometry kinds a value can be declared with, and the column types they map to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// WGS84, used whenever neither the geometry nor the caller names a spatial reference.
pub const DEFAULT_SRID: i32 = 4326;

/// Column type used for values that accept any geometry kind.
pub const GENERIC_TYPE_DESCRIPTOR: &str = "geometry";

/// One of the seven supported geometry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// All kinds, in WKB type-code order.
    pub const ALL: [GeometryKind; 7] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// The canonical name used in column type descriptors, e.g. `MultiPolygon`.
    pub fn name(&self) -> &'static str {
        use GeometryKind::*;
        match self {
            Point => "Point",
            LineString => "LineString",
            Polygon => "Polygon",
            MultiPoint => "MultiPoint",
            MultiLineString => "MultiLineString",
            MultiPolygon => "MultiPolygon",
            GeometryCollection => "GeometryCollection",
        }
    }

    /// The upper-case keyword that opens this kind's WKT form.
    pub fn wkt_tag(&self) -> &'static str {
        use GeometryKind::*;
        match self {
            Point => "POINT",
            LineString => "LINESTRING",
            Polygon => "POLYGON",
            MultiPoint => "MULTIPOINT",
            MultiLineString => "MULTILINESTRING",
            MultiPolygon => "MULTIPOLYGON",
            GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeometryError::UnknownGeometryKind(s.to_string()))
    }
}

/// Column type for a geometry column, e.g. `Geometry(Polygon, 4326)`.
///
/// `None` describes an unconstrained column and yields [`GENERIC_TYPE_DESCRIPTOR`].
pub fn type_descriptor(kind: Option<GeometryKind>, srid: i32) -> String {
    match kind {
        Some(kind) => format!("Geometry({}, {})", kind.name(), srid),
        None => GENERIC_TYPE_DESCRIPTOR.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn descriptors_for_every_kind() {
        let expected = [
            "Geometry(Point, 4326)",
            "Geometry(LineString, 4326)",
            "Geometry(Polygon, 4326)",
            "Geometry(MultiPoint, 4326)",
            "Geometry(MultiLineString, 4326)",
            "Geometry(MultiPolygon, 4326)",
            "Geometry(GeometryCollection, 4326)",
        ];
        for (kind, expected) in GeometryKind::ALL.iter().zip(expected) {
            assert_eq!(type_descriptor(Some(*kind), DEFAULT_SRID), expected);
        }
    }

    #[test]
    fn generic_descriptor() {
        assert_eq!(type_descriptor(None, 3857), "geometry");
    }

    #[test]
    fn custom_srid() {
        assert_eq!(
            type_descriptor(Some(GeometryKind::Point), 3857),
            "Geometry(Point, 3857)"
        );
    }

    #[test]
    fn parse_kind_ignores_case() {
        assert_eq!(
            "multipolygon".parse::<GeometryKind>().unwrap(),
            GeometryKind::MultiPolygon
        );
        assert!(matches!(
            "Curve".parse::<GeometryKind>(),
            Err(GeometryError::UnknownGeometryKind(name)) if name == "Curve"
        ));
    }
}
