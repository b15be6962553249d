use std::io::Write;

use crate::error::{GeometryError, Result};
use crate::geometry::Point;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::writer::{header_size, write_coord, write_header, COORD_BYTES};

/// The byte length of a WKBPoint
pub fn point_wkb_size(srid: Option<i32>) -> usize {
    header_size(srid) + COORD_BYTES
}

/// Write a Point geometry to a Writer encoded as WKB
pub fn write_point_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Point,
    srid: Option<i32>,
) -> Result<()> {
    let coord = geom.coord().ok_or_else(|| {
        GeometryError::UnsupportedLayout("point has no coordinates".to_string())
    })?;
    write_header(writer, WKBType::Point, srid)?;
    write_coord(writer, coord)
}
