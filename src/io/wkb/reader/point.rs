use crate::error::Result;
use crate::geometry::Point;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::WKBCursor;

/// Read the coordinate of a WKB point.
///
/// `NaN NaN` is how PostGIS stores `POINT EMPTY`; it is read back as an empty point.
pub(super) fn read_point_body(cursor: &mut WKBCursor, byte_order: Endianness) -> Result<Point> {
    let coord = cursor.read_coord(byte_order)?;
    if coord.x.is_nan() && coord.y.is_nan() {
        Ok(Point::empty())
    } else {
        Ok(coord.into())
    }
}
