use crate::geometry::MultiPoint;

pub(crate) fn mp0() -> MultiPoint {
    vec![(0., 1.), (1., 2.)].into()
}

pub(crate) fn mp1() -> MultiPoint {
    vec![(3., 4.), (5., 6.)].into()
}
