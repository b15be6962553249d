use crate::geometry::{Geometry, GeometryCollection};
use crate::test::{linestring, multipolygon, point};

pub(crate) fn gc0() -> GeometryCollection {
    GeometryCollection::new(vec![
        Geometry::Point(point::p1()),
        Geometry::LineString(linestring::ls0()),
    ])
}

/// A collection holding another collection
pub(crate) fn gc1() -> GeometryCollection {
    GeometryCollection::new(vec![
        Geometry::MultiPolygon(multipolygon::mp0()),
        Geometry::GeometryCollection(gc0()),
    ])
}
