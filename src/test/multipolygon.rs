use crate::geometry::MultiPolygon;
use crate::test::polygon;

pub(crate) fn mp0() -> MultiPolygon {
    MultiPolygon::new(vec![polygon::p0(), polygon::p1()])
}
