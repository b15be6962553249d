use crate::error::Result;
use crate::geometry::MultiPoint;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::reader::point::read_point_body;
use crate::io::wkb::reader::{WKBCursor, WKBHeader, POINT_MEMBER_BYTES};

pub(super) fn read_multi_point_body(
    cursor: &mut WKBCursor,
    byte_order: Endianness,
) -> Result<MultiPoint> {
    let num_points = cursor.read_count(byte_order, POINT_MEMBER_BYTES)?;
    let points = (0..num_points)
        .map(|_| {
            let header = WKBHeader::read_member(cursor, WKBType::Point)?;
            read_point_body(cursor, header.byte_order)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(MultiPoint::new(points))
}
