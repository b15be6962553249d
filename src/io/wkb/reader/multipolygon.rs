use crate::error::Result;
use crate::geometry::MultiPolygon;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::reader::polygon::read_polygon_body;
use crate::io::wkb::reader::{WKBCursor, WKBHeader, MIN_MEMBER_BYTES};

pub(super) fn read_multi_polygon_body(
    cursor: &mut WKBCursor,
    byte_order: Endianness,
) -> Result<MultiPolygon> {
    let num_polygons = cursor.read_count(byte_order, MIN_MEMBER_BYTES)?;
    let polygons = (0..num_polygons)
        .map(|_| {
            let header = WKBHeader::read_member(cursor, WKBType::Polygon)?;
            read_polygon_body(cursor, header.byte_order)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(MultiPolygon::new(polygons))
}
