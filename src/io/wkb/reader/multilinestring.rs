use crate::error::Result;
use crate::geometry::MultiLineString;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::reader::linestring::read_line_string_body;
use crate::io::wkb::reader::{WKBCursor, WKBHeader, MIN_MEMBER_BYTES};

pub(super) fn read_multi_line_string_body(
    cursor: &mut WKBCursor,
    byte_order: Endianness,
) -> Result<MultiLineString> {
    let num_lines = cursor.read_count(byte_order, MIN_MEMBER_BYTES)?;
    let lines = (0..num_lines)
        .map(|_| {
            let header = WKBHeader::read_member(cursor, WKBType::LineString)?;
            read_line_string_body(cursor, header.byte_order)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(MultiLineString::new(lines))
}
