use std::io::Write;

use crate::error::Result;
use crate::geometry::GeometryCollection;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::writer::geometry::{geometry_wkb_size, write_geometry_as_wkb};
use crate::io::wkb::writer::{header_size, write_count, write_header, COUNT_BYTES};

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection, srid: Option<i32>) -> usize {
    let members: usize = geom
        .geometries()
        .iter()
        .map(|inner_geom| geometry_wkb_size(inner_geom, None))
        .sum();
    header_size(srid) + COUNT_BYTES + members
}

/// Write a GeometryCollection geometry to a Writer encoded as WKB
///
/// Each member is written with its own byte order marker and type code.
pub fn write_geometry_collection_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &GeometryCollection,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, WKBType::GeometryCollection, srid)?;

    // numGeometries
    write_count(writer, geom.num_geometries())?;
    for inner_geom in geom.geometries() {
        write_geometry_as_wkb(writer, inner_geom, None)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometrycollection::{gc0, gc1};

    #[test]
    fn test_size() {
        for geom in [gc0(), gc1(), GeometryCollection::default()] {
            let mut buf: Vec<u8> = vec![];
            write_geometry_collection_as_wkb(&mut buf, &geom, Some(4326)).unwrap();
            assert_eq!(buf.len(), geometry_collection_wkb_size(&geom, Some(4326)));
        }
    }
}
