use crate::geometry::LineString;

pub(crate) fn ls0() -> LineString {
    vec![(0., 1.), (1., 2.)].into()
}

pub(crate) fn ls1() -> LineString {
    vec![(3., 4.), (5., 6.)].into()
}
