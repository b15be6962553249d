use std::io::Write;

use crate::error::Result;
use crate::geometry::MultiPoint;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::io::wkb::writer::{header_size, write_count, write_header, COUNT_BYTES};

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint, srid: Option<i32>) -> usize {
    header_size(srid) + COUNT_BYTES + geom.num_points() * point_wkb_size(None)
}

/// Write a MultiPoint geometry to a Writer encoded as WKB
pub fn write_multi_point_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPoint,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, WKBType::MultiPoint, srid)?;

    // numPoints
    write_count(writer, geom.num_points())?;
    for point in geom.points() {
        write_point_as_wkb(writer, point, None)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::Point;
    use crate::test::multipoint::mp0;

    #[test]
    fn members_have_their_own_header() {
        let mut buf: Vec<u8> = vec![];
        write_multi_point_as_wkb(&mut buf, &mp0(), Some(4326)).unwrap();
        assert_eq!(buf.len(), multi_point_wkb_size(&mp0(), Some(4326)));
        // first member starts after header (9) and count (4), without SRID flag
        assert_eq!(&buf[13..18], &[1, 1, 0, 0, 0]);
    }

    #[test]
    fn empty_member() {
        let geom = MultiPoint::new(vec![Point::new(1., 2.), Point::empty()]);
        let err = write_multi_point_as_wkb(&mut Vec::<u8>::new(), &geom, None).unwrap_err();
        assert!(matches!(err, GeometryError::UnsupportedLayout(_)));
    }
}
