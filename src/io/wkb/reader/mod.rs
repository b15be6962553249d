//! A reader for EWKB and plain WKB, in either byte order.
//!
//! Every read is bounds-checked; running out of input is reported as
//! [`GeometryError::MalformedEwkb`] with the offset where the input ended.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::error::{GeometryError, Result};
use crate::geometry::Coord;
use crate::io::wkb::common::{Endianness, WKBType};

pub use geometry::read_geometry;

/// Smallest possible encoding of a member geometry: byte order, type code and one count.
const MIN_MEMBER_BYTES: usize = 1 + 4 + 4;
/// Encoding of a member point: byte order, type code and two f64s.
const POINT_MEMBER_BYTES: usize = 1 + 4 + 16;
const COORD_BYTES: usize = 16;
/// How many geometry collections may enclose a geometry.
const MAX_NESTING_DEPTH: usize = 64;
const COUNT_BYTES: usize = 4;

/// A bounds-checked cursor over an EWKB buffer
pub struct WKBCursor<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> WKBCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
        }
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// The number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len() as u64;
        len.saturating_sub(self.cursor.position()) as usize
    }

    fn truncated(position: u64) -> GeometryError {
        GeometryError::MalformedEwkb(format!("unexpected end of input at byte {position}"))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let position = self.position();
        self.cursor
            .read_u8()
            .map_err(|_| Self::truncated(position))
    }

    pub fn read_u32(&mut self, byte_order: Endianness) -> Result<u32> {
        let position = self.position();
        match byte_order {
            Endianness::BigEndian => self.cursor.read_u32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_u32::<LittleEndian>(),
        }
        .map_err(|_| Self::truncated(position))
    }

    pub fn read_i32(&mut self, byte_order: Endianness) -> Result<i32> {
        let position = self.position();
        match byte_order {
            Endianness::BigEndian => self.cursor.read_i32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_i32::<LittleEndian>(),
        }
        .map_err(|_| Self::truncated(position))
    }

    pub fn read_f64(&mut self, byte_order: Endianness) -> Result<f64> {
        let position = self.position();
        match byte_order {
            Endianness::BigEndian => self.cursor.read_f64::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_f64::<LittleEndian>(),
        }
        .map_err(|_| Self::truncated(position))
    }

    /// Read an element count, rejecting counts the rest of the input cannot possibly hold.
    ///
    /// `min_item_bytes` is the smallest encoding of one element.
    pub fn read_count(&mut self, byte_order: Endianness, min_item_bytes: usize) -> Result<usize> {
        let position = self.position();
        let count = self.read_u32(byte_order)? as usize;
        if count.saturating_mul(min_item_bytes) > self.remaining() {
            return Err(GeometryError::MalformedEwkb(format!(
                "count {count} at byte {position} exceeds the remaining input"
            )));
        }
        Ok(count)
    }

    pub fn read_coord(&mut self, byte_order: Endianness) -> Result<Coord> {
        let x = self.read_f64(byte_order)?;
        let y = self.read_f64(byte_order)?;
        Ok(Coord { x, y })
    }

    /// Read a count-prefixed coordinate sequence
    pub fn read_coords(&mut self, byte_order: Endianness) -> Result<Vec<Coord>> {
        let num_coords = self.read_count(byte_order, COORD_BYTES)?;
        (0..num_coords)
            .map(|_| self.read_coord(byte_order))
            .collect()
    }
}

/// The byte order, type and optional SRID that open every (E)WKB geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WKBHeader {
    pub byte_order: Endianness,
    pub wkb_type: WKBType,
    pub srid: Option<i32>,
}

impl WKBHeader {
    pub fn read(cursor: &mut WKBCursor) -> Result<Self> {
        let byte_order = Endianness::try_from(cursor.read_u8()?)?;
        let code = cursor.read_u32(byte_order)?;
        let (wkb_type, has_srid) = WKBType::from_ewkb_code(code)?;
        let srid = if has_srid {
            Some(cursor.read_i32(byte_order)?)
        } else {
            None
        };
        Ok(Self {
            byte_order,
            wkb_type,
            srid,
        })
    }

    /// Read the header of a multi-geometry member, which must be of the `expected` type.
    ///
    /// Any SRID on a member is discarded.
    pub fn read_member(cursor: &mut WKBCursor, expected: WKBType) -> Result<Self> {
        let position = cursor.position();
        let header = Self::read(cursor)?;
        if header.wkb_type != expected {
            return Err(GeometryError::MalformedEwkb(format!(
                "expected a {expected:?} member at byte {position}, found {:?}",
                header.wkb_type
            )));
        }
        Ok(header)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn truncated_reads() {
        let buf = [1u8, 2, 3];
        let mut cursor = WKBCursor::new(&buf);
        assert_eq!(cursor.read_u8().unwrap(), 1);
        let err = cursor.read_u32(Endianness::LittleEndian).unwrap_err();
        assert!(matches!(err, GeometryError::MalformedEwkb(msg) if msg.contains("byte 1")));
    }

    #[test]
    fn impossible_count() {
        // claims u32::MAX coordinates with nothing following
        let buf = [0xff, 0xff, 0xff, 0xff];
        let mut cursor = WKBCursor::new(&buf);
        assert!(matches!(
            cursor.read_count(Endianness::BigEndian, COORD_BYTES),
            Err(GeometryError::MalformedEwkb(_))
        ));
    }

    #[test]
    fn big_endian_header() {
        let buf = [0u8, 0x20, 0, 0, 1, 0, 0, 0x10, 0xe6];
        let header = WKBHeader::read(&mut WKBCursor::new(&buf)).unwrap();
        assert_eq!(header.byte_order, Endianness::BigEndian);
        assert_eq!(header.wkb_type, WKBType::Point);
        assert_eq!(header.srid, Some(4326));
    }
}
