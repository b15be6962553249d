use crate::error::Result;
use crate::geometry::LineString;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::WKBCursor;

pub(super) fn read_line_string_body(
    cursor: &mut WKBCursor,
    byte_order: Endianness,
) -> Result<LineString> {
    Ok(LineString::new(cursor.read_coords(byte_order)?))
}
