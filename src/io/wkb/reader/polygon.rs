use crate::error::Result;
use crate::geometry::{LineString, Polygon};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::{WKBCursor, COUNT_BYTES};

pub(super) fn read_polygon_body(cursor: &mut WKBCursor, byte_order: Endianness) -> Result<Polygon> {
    let num_rings = cursor.read_count(byte_order, COUNT_BYTES)?;
    let rings = (0..num_rings)
        .map(|_| cursor.read_coords(byte_order).map(LineString::new))
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::from_rings(rings))
}
