use crate::error::{GeometryError, Result};
use crate::geo_traits::GeometryTrait;
use crate::geometry::Geometry;
use crate::io::wkb::reader::{read_geometry, WKBCursor};
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry_as_ewkb};

/// Encode a geometry as little-endian EWKB carrying `srid`.
pub fn to_ewkb(geom: &(impl GeometryTrait + ?Sized), srid: i32) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(geometry_wkb_size(geom, Some(srid)));
    write_geometry_as_ewkb(&mut buf, geom, srid)?;
    Ok(buf)
}

/// Encode a geometry as EWKB, then as lowercase hex without prefix.
pub fn to_hex_ewkb(geom: &(impl GeometryTrait + ?Sized), srid: i32) -> Result<String> {
    Ok(hex::encode(to_ewkb(geom, srid)?))
}

/// Decode an EWKB (or plain WKB) buffer holding exactly one geometry.
///
/// Returns the geometry and the SRID of the outermost geometry, if it carried one.
pub fn from_ewkb(buf: &[u8]) -> Result<(Geometry, Option<i32>)> {
    let mut cursor = WKBCursor::new(buf);
    let decoded = read_geometry(&mut cursor)?;
    if cursor.remaining() > 0 {
        return Err(GeometryError::MalformedEwkb(format!(
            "{} trailing bytes after geometry",
            cursor.remaining()
        )));
    }
    Ok(decoded)
}

/// Decode a hex string, in either case, then the EWKB it holds.
pub fn from_hex_ewkb(hex_ewkb: &str) -> Result<(Geometry, Option<i32>)> {
    from_ewkb(&hex::decode(hex_ewkb)?)
}
