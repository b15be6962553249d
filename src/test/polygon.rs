use crate::geometry::{LineString, Polygon};

/// `POLYGON ((42 42, 1 1, 2 2, 42 42))`
pub(crate) fn p0() -> Polygon {
    Polygon::new(vec![(42., 42.), (1., 1.), (2., 2.), (42., 42.)].into(), vec![])
}

/// A square with a square hole
pub(crate) fn p1() -> Polygon {
    let exterior: LineString =
        vec![(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)].into();
    let hole: LineString = vec![(2., 2.), (4., 2.), (4., 4.), (2., 4.), (2., 2.)].into();
    Polygon::new(exterior, vec![hole])
}
