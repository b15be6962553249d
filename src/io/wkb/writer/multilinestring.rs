use std::io::Write;

use crate::error::Result;
use crate::geometry::MultiLineString;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};
use crate::io::wkb::writer::{header_size, write_count, write_header, COUNT_BYTES};

/// The byte length of a WKBMultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString, srid: Option<i32>) -> usize {
    let lines: usize = geom
        .line_strings()
        .iter()
        .map(|line| line_string_wkb_size(line, None))
        .sum();
    header_size(srid) + COUNT_BYTES + lines
}

/// Write a MultiLineString geometry to a Writer encoded as WKB
pub fn write_multi_line_string_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiLineString,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, WKBType::MultiLineString, srid)?;

    // numLineStrings
    write_count(writer, geom.num_line_strings())?;
    for line in geom.line_strings() {
        write_line_string_as_wkb(writer, line, None)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multilinestring::ml0;

    #[test]
    fn test_size() {
        let mut buf: Vec<u8> = vec![];
        write_multi_line_string_as_wkb(&mut buf, &ml0(), Some(4326)).unwrap();
        assert_eq!(buf.len(), multi_line_string_wkb_size(&ml0(), Some(4326)));
    }
}
