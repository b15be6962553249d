use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datatypes::GeometryKind;
use crate::error::GeometryError;

/// Set on the type code when a 4-byte SRID follows it.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;
/// Set on the type code of geometries carrying a Z coordinate.
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// Set on the type code of geometries carrying an M coordinate.
pub const EWKB_M_FLAG: u32 = 0x4000_0000;

const EWKB_FLAGS: u32 = EWKB_SRID_FLAG | EWKB_Z_FLAG | EWKB_M_FLAG;

/// The 2D WKB type codes supported by this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl WKBType {
    /// Split an EWKB type code into its 2D base type and its SRID flag.
    ///
    /// Z/M geometries, flagged either the EWKB way or with an ISO code such as 1001 or 3007, are
    /// rejected with [`GeometryError::UnsupportedLayout`].
    pub fn from_ewkb_code(code: u32) -> Result<(Self, bool), GeometryError> {
        if code & (EWKB_Z_FLAG | EWKB_M_FLAG) != 0 {
            return Err(GeometryError::UnsupportedLayout(format!(
                "type code {code:#010x} has Z or M coordinates, only XY is supported"
            )));
        }
        let has_srid = code & EWKB_SRID_FLAG != 0;
        let base = code & !EWKB_FLAGS;
        match base {
            1000..=3999 if (1..=7).contains(&(base % 1000)) => {
                Err(GeometryError::UnsupportedLayout(format!(
                    "type code {base} has Z or M coordinates, only XY is supported"
                )))
            }
            _ => Self::try_from_primitive(base)
                .map(|wkb_type| (wkb_type, has_srid))
                .map_err(|_| GeometryError::MalformedEwkb(format!("unsupported type code {base}"))),
        }
    }

    /// The type code to write, with the SRID flag set when an SRID follows.
    pub fn ewkb_code(&self, has_srid: bool) -> u32 {
        let code: u32 = (*self).into();
        if has_srid {
            code | EWKB_SRID_FLAG
        } else {
            code
        }
    }
}

impl From<GeometryKind> for WKBType {
    fn from(value: GeometryKind) -> Self {
        match value {
            GeometryKind::Point => WKBType::Point,
            GeometryKind::LineString => WKBType::LineString,
            GeometryKind::Polygon => WKBType::Polygon,
            GeometryKind::MultiPoint => WKBType::MultiPoint,
            GeometryKind::MultiLineString => WKBType::MultiLineString,
            GeometryKind::MultiPolygon => WKBType::MultiPolygon,
            GeometryKind::GeometryCollection => WKBType::GeometryCollection,
        }
    }
}

impl From<WKBType> for GeometryKind {
    fn from(value: WKBType) -> Self {
        match value {
            WKBType::Point => GeometryKind::Point,
            WKBType::LineString => GeometryKind::LineString,
            WKBType::Polygon => GeometryKind::Polygon,
            WKBType::MultiPoint => GeometryKind::MultiPoint,
            WKBType::MultiLineString => GeometryKind::MultiLineString,
            WKBType::MultiPolygon => GeometryKind::MultiPolygon,
            WKBType::GeometryCollection => GeometryKind::GeometryCollection,
        }
    }
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeometryError::MalformedEwkb(format!(
                "unexpected byte order marker {other}"
            ))),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}
