use crate::error::{GeometryError, Result};
use crate::geometry::Geometry;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::reader::geometrycollection::read_geometry_collection_body;
use crate::io::wkb::reader::linestring::read_line_string_body;
use crate::io::wkb::reader::multilinestring::read_multi_line_string_body;
use crate::io::wkb::reader::multipoint::read_multi_point_body;
use crate::io::wkb::reader::multipolygon::read_multi_polygon_body;
use crate::io::wkb::reader::point::read_point_body;
use crate::io::wkb::reader::polygon::read_polygon_body;
use crate::io::wkb::reader::{WKBCursor, WKBHeader, MAX_NESTING_DEPTH};

/// Read one geometry, header included, and return it with its SRID if it carried one.
pub fn read_geometry(cursor: &mut WKBCursor) -> Result<(Geometry, Option<i32>)> {
    read_nested_geometry(cursor, 0)
}

/// Read a geometry sitting `depth` collections deep.
pub(super) fn read_nested_geometry(
    cursor: &mut WKBCursor,
    depth: usize,
) -> Result<(Geometry, Option<i32>)> {
    if depth > MAX_NESTING_DEPTH {
        return Err(GeometryError::MalformedEwkb(format!(
            "geometry collections nested deeper than {MAX_NESTING_DEPTH} at byte {}",
            cursor.position()
        )));
    }

    let WKBHeader {
        byte_order,
        wkb_type,
        srid,
    } = WKBHeader::read(cursor)?;

    let geom = match wkb_type {
        WKBType::Point => Geometry::Point(read_point_body(cursor, byte_order)?),
        WKBType::LineString => Geometry::LineString(read_line_string_body(cursor, byte_order)?),
        WKBType::Polygon => Geometry::Polygon(read_polygon_body(cursor, byte_order)?),
        WKBType::MultiPoint => Geometry::MultiPoint(read_multi_point_body(cursor, byte_order)?),
        WKBType::MultiLineString => {
            Geometry::MultiLineString(read_multi_line_string_body(cursor, byte_order)?)
        }
        WKBType::MultiPolygon => {
            Geometry::MultiPolygon(read_multi_polygon_body(cursor, byte_order)?)
        }
        WKBType::GeometryCollection => {
            let geom = read_geometry_collection_body(cursor, byte_order, depth)?;
            Geometry::GeometryCollection(geom)
        }
    };

    Ok((geom, srid))
}
