use std::io::Write;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::writer::{
    coords_size, header_size, write_coords, write_count, write_header, COUNT_BYTES,
};

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon, srid: Option<i32>) -> usize {
    let rings: usize = geom.rings().iter().map(|ring| coords_size(ring.coords())).sum();
    header_size(srid) + COUNT_BYTES + rings
}

/// Write a Polygon geometry to a Writer encoded as WKB
pub fn write_polygon_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Polygon,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, WKBType::Polygon, srid)?;

    // numRings
    write_count(writer, geom.num_rings())?;
    for ring in geom.rings() {
        write_coords(writer, ring.coords())?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon::{p0, p1};

    #[test]
    fn test_size() {
        for geom in [p0(), p1()] {
            let mut buf: Vec<u8> = vec![];
            write_polygon_as_wkb(&mut buf, &geom, Some(4326)).unwrap();
            assert_eq!(polygon_wkb_size(&geom, Some(4326)), buf.len());
        }
    }

    #[test]
    fn ring_count() {
        let mut buf: Vec<u8> = vec![];
        write_polygon_as_wkb(&mut buf, &p1(), None).unwrap();
        assert_eq!(&buf[5..9], &[2, 0, 0, 0]);
        // exterior numPoints
        assert_eq!(&buf[9..13], &[5, 0, 0, 0]);
    }
}
