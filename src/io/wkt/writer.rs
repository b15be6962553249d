use std::fmt::Write;

use crate::error::{GeometryError, Result};
use crate::geo_traits::{GeometryTrait, GeometryType};
use crate::geometry::{
    Coord, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

const EMPTY: &str = "EMPTY";

/// Render a geometry as WKT.
pub trait ToWkt {
    /// Returns the WKT form, e.g. `POINT (42 42)`.
    fn to_wkt(&self) -> Result<String>;
}

impl<G: GeometryTrait + ?Sized> ToWkt for G {
    fn to_wkt(&self) -> Result<String> {
        let mut out = String::new();
        write_geometry(&mut out, self)?;
        Ok(out)
    }
}

/// Write a geometry as WKT, tag included.
///
/// Numbers use the shortest decimal form that reads back to the same `f64`, never scientific
/// notation. Empty line strings, polygons and collections render as `<TAG> EMPTY`; a point
/// without coordinates cannot be rendered.
pub fn write_geometry<W: Write>(out: &mut W, geom: &(impl GeometryTrait + ?Sized)) -> Result<()> {
    let geom_type = geom.as_type();
    out.write_str(geom_type.kind().wkt_tag())?;
    out.write_char(' ')?;
    match geom_type {
        GeometryType::Point(g) => write_point(out, g),
        GeometryType::LineString(g) => write_line_string(out, g),
        GeometryType::Polygon(g) => write_polygon(out, g),
        GeometryType::MultiPoint(g) => write_multi_point(out, g),
        GeometryType::MultiLineString(g) => write_multi_line_string(out, g),
        GeometryType::MultiPolygon(g) => write_multi_polygon(out, g),
        GeometryType::GeometryCollection(g) => write_geometry_collection(out, g),
    }
}

/// `(item, item, ...)`, or `EMPTY` when there are no items
fn write_list<W: Write, T>(
    out: &mut W,
    items: &[T],
    mut write_item: impl FnMut(&mut W, &T) -> Result<()>,
) -> Result<()> {
    if items.is_empty() {
        out.write_str(EMPTY)?;
        return Ok(());
    }
    out.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_item(out, item)?;
    }
    out.write_char(')')?;
    Ok(())
}

fn write_coord<W: Write>(out: &mut W, coord: &Coord) -> Result<()> {
    // f64's Display is the shortest round-trip decimal, never in exponent form
    write!(out, "{} {}", coord.x, coord.y)?;
    Ok(())
}

fn write_point<W: Write>(out: &mut W, point: &Point) -> Result<()> {
    let coord = point.coord().ok_or_else(|| {
        GeometryError::UnsupportedLayout("point has no coordinates".to_string())
    })?;
    out.write_char('(')?;
    write_coord(out, &coord)?;
    out.write_char(')')?;
    Ok(())
}

fn write_line_string<W: Write>(out: &mut W, line_string: &LineString) -> Result<()> {
    write_list(out, line_string.coords(), write_coord)
}

fn write_polygon<W: Write>(out: &mut W, polygon: &Polygon) -> Result<()> {
    write_list(out, polygon.rings(), write_line_string)
}

fn write_multi_point<W: Write>(out: &mut W, multi_point: &MultiPoint) -> Result<()> {
    write_list(out, multi_point.points(), write_point)
}

fn write_multi_line_string<W: Write>(
    out: &mut W,
    multi_line_string: &MultiLineString,
) -> Result<()> {
    write_list(out, multi_line_string.line_strings(), write_line_string)
}

fn write_multi_polygon<W: Write>(out: &mut W, multi_polygon: &MultiPolygon) -> Result<()> {
    write_list(out, multi_polygon.polygons(), write_polygon)
}

fn write_geometry_collection<W: Write>(
    out: &mut W,
    geometry_collection: &GeometryCollection,
) -> Result<()> {
    write_list(out, geometry_collection.geometries(), |out, geom| {
        write_geometry(out, geom)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Geometry;
    use crate::test::{
        geometrycollection, linestring, multilinestring, multipoint, multipolygon, point, polygon,
    };

    #[test]
    fn point() {
        assert_eq!(point::p42().to_wkt().unwrap(), "POINT (42 42)");
    }

    #[test]
    fn polygon() {
        assert_eq!(
            polygon::p0().to_wkt().unwrap(),
            "POLYGON ((42 42, 1 1, 2 2, 42 42))"
        );
        assert_eq!(
            polygon::p1().to_wkt().unwrap(),
            "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))"
        );
    }

    #[test]
    fn line_string() {
        assert_eq!(linestring::ls0().to_wkt().unwrap(), "LINESTRING (0 1, 1 2)");
    }

    #[test]
    fn multi_geometries() {
        assert_eq!(
            multipoint::mp0().to_wkt().unwrap(),
            "MULTIPOINT ((0 1), (1 2))"
        );
        assert_eq!(
            multilinestring::ml0().to_wkt().unwrap(),
            "MULTILINESTRING ((0 1, 1 2), (3 4, 5 6))"
        );
        assert_eq!(
            multipolygon::mp0().to_wkt().unwrap(),
            "MULTIPOLYGON (((42 42, 1 1, 2 2, 42 42)), \
             ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2)))"
        );
    }

    #[test]
    fn nested_collection() {
        assert_eq!(
            geometrycollection::gc0().to_wkt().unwrap(),
            "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 1, 1 2))"
        );
        let nested = geometrycollection::gc1().to_wkt().unwrap();
        assert!(nested.starts_with("GEOMETRYCOLLECTION (MULTIPOLYGON ((("));
        assert!(nested.ends_with("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 1, 1 2)))"));
    }

    #[test]
    fn number_formatting() {
        let geom = LineString::from(vec![(0.1, -1.5), (1e21, 1e-7), (-0.0, 123456.789)]);
        assert_eq!(
            geom.to_wkt().unwrap(),
            "LINESTRING (0.1 -1.5, 1000000000000000000000 0.0000001, -0 123456.789)"
        );
    }

    #[test]
    fn empty_geometries() {
        assert_eq!(LineString::default().to_wkt().unwrap(), "LINESTRING EMPTY");
        assert_eq!(Polygon::empty().to_wkt().unwrap(), "POLYGON EMPTY");
        assert_eq!(
            Geometry::GeometryCollection(GeometryCollection::default())
                .to_wkt()
                .unwrap(),
            "GEOMETRYCOLLECTION EMPTY"
        );
    }

    #[test]
    fn empty_point_cannot_be_rendered() {
        assert!(matches!(
            Point::empty().to_wkt(),
            Err(GeometryError::UnsupportedLayout(_))
        ));
        assert!(MultiPoint::new(vec![Point::empty()]).to_wkt().is_err());
    }
}
