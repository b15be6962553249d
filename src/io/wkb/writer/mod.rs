//! Writers for each geometry kind. Output is always little-endian.
//!
//! Only the outermost geometry carries an SRID; members of multi-geometries and collections
//! are written as plain WKB.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{GeometryError, Result};
use crate::geometry::Coord;
use crate::io::wkb::common::{Endianness, WKBType};

pub use geometry::{geometry_wkb_size, write_geometry_as_ewkb, write_geometry_as_wkb};
pub use geometrycollection::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
pub use linestring::{line_string_wkb_size, write_line_string_as_wkb};
pub use multilinestring::{multi_line_string_wkb_size, write_multi_line_string_as_wkb};
pub use multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
pub use multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
pub use point::{point_wkb_size, write_point_as_wkb};
pub use polygon::{polygon_wkb_size, write_polygon_as_wkb};

/// Two f64s per coordinate
const COORD_BYTES: usize = 2 * 8;
/// Element counts are u32
const COUNT_BYTES: usize = 4;

/// The byte length of the byte order marker, type code and optional SRID
pub(crate) fn header_size(srid: Option<i32>) -> usize {
    1 + 4 + if srid.is_some() { 4 } else { 0 }
}

/// The byte length of a count-prefixed coordinate sequence
pub(crate) fn coords_size(coords: &[Coord]) -> usize {
    COUNT_BYTES + coords.len() * COORD_BYTES
}

pub(crate) fn write_header<W: Write + ?Sized>(
    writer: &mut W,
    wkb_type: WKBType,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_u8(Endianness::LittleEndian.into())?;
    writer.write_u32::<LittleEndian>(wkb_type.ewkb_code(srid.is_some()))?;
    if let Some(srid) = srid {
        writer.write_i32::<LittleEndian>(srid)?;
    }
    Ok(())
}

pub(crate) fn write_count<W: Write + ?Sized>(writer: &mut W, count: usize) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| {
        GeometryError::UnsupportedLayout(format!("{count} elements do not fit a WKB count"))
    })?;
    writer.write_u32::<LittleEndian>(count)?;
    Ok(())
}

pub(crate) fn write_coord<W: Write + ?Sized>(writer: &mut W, coord: Coord) -> Result<()> {
    writer.write_f64::<LittleEndian>(coord.x)?;
    writer.write_f64::<LittleEndian>(coord.y)?;
    Ok(())
}

/// Write a count-prefixed coordinate sequence
pub(crate) fn write_coords<W: Write + ?Sized>(writer: &mut W, coords: &[Coord]) -> Result<()> {
    write_count(writer, coords.len())?;
    for coord in coords {
        write_coord(writer, *coord)?;
    }
    Ok(())
}
