use std::io::Write;

use crate::error::Result;
use crate::geometry::MultiPolygon;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};
use crate::io::wkb::writer::{header_size, write_count, write_header, COUNT_BYTES};

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon, srid: Option<i32>) -> usize {
    let polygons: usize = geom
        .polygons()
        .iter()
        .map(|polygon| polygon_wkb_size(polygon, None))
        .sum();
    header_size(srid) + COUNT_BYTES + polygons
}

/// Write a MultiPolygon geometry to a Writer encoded as WKB
pub fn write_multi_polygon_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPolygon,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, WKBType::MultiPolygon, srid)?;

    // numPolygons
    write_count(writer, geom.num_polygons())?;
    for polygon in geom.polygons() {
        write_polygon_as_wkb(writer, polygon, None)?;
    }

    Ok(())
}
