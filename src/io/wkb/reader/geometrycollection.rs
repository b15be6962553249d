use crate::error::Result;
use crate::geometry::GeometryCollection;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::geometry::read_nested_geometry;
use crate::io::wkb::reader::{WKBCursor, MIN_MEMBER_BYTES};

/// Members are full geometries of any kind, each with its own header.
///
/// `depth` is the nesting depth of the collection itself.
pub(super) fn read_geometry_collection_body(
    cursor: &mut WKBCursor,
    byte_order: Endianness,
    depth: usize,
) -> Result<GeometryCollection> {
    let num_geometries = cursor.read_count(byte_order, MIN_MEMBER_BYTES)?;
    let geometries = (0..num_geometries)
        .map(|_| read_nested_geometry(cursor, depth + 1).map(|(geom, _srid)| geom))
        .collect::<Result<Vec<_>>>()?;
    Ok(GeometryCollection::new(geometries))
}
