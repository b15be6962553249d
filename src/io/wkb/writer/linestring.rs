use std::io::Write;

use crate::error::Result;
use crate::geometry::LineString;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::writer::{coords_size, header_size, write_coords, write_header};

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString, srid: Option<i32>) -> usize {
    header_size(srid) + coords_size(geom.coords())
}

/// Write a LineString geometry to a Writer encoded as WKB
pub fn write_line_string_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &LineString,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, WKBType::LineString, srid)?;
    write_coords(writer, geom.coords())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::ls0;

    #[test]
    fn test_size() {
        let geom = ls0();
        let mut buf: Vec<u8> = vec![];
        write_line_string_as_wkb(&mut buf, &geom, None).unwrap();
        assert_eq!(line_string_wkb_size(&geom, None), buf.len());
        // numPoints
        assert_eq!(&buf[5..9], &[2, 0, 0, 0]);
    }

    #[test]
    fn empty_line_string() {
        let mut buf: Vec<u8> = vec![];
        write_line_string_as_wkb(&mut buf, &LineString::default(), None).unwrap();
        assert_eq!(buf, [1, 2, 0, 0, 0, 0, 0, 0, 0]);
    }
}
