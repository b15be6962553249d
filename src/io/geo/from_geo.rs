use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

impl From<geo::Coord> for Coord {
    fn from(value: geo::Coord) -> Self {
        Coord {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        Point::from(Coord::from(value.0))
    }
}

impl From<geo::LineString> for LineString {
    fn from(value: geo::LineString) -> Self {
        LineString::new(value.0.into_iter().map(Coord::from).collect())
    }
}

impl From<geo::Polygon> for Polygon {
    fn from(value: geo::Polygon) -> Self {
        let (exterior, interiors) = value.into_inner();
        if exterior.0.is_empty() && interiors.is_empty() {
            return Polygon::empty();
        }
        Polygon::new(
            exterior.into(),
            interiors.into_iter().map(LineString::from).collect(),
        )
    }
}

impl From<geo::MultiPoint> for MultiPoint {
    fn from(value: geo::MultiPoint) -> Self {
        MultiPoint::new(value.0.into_iter().map(Point::from).collect())
    }
}

impl From<geo::MultiLineString> for MultiLineString {
    fn from(value: geo::MultiLineString) -> Self {
        MultiLineString::new(value.0.into_iter().map(LineString::from).collect())
    }
}

impl From<geo::MultiPolygon> for MultiPolygon {
    fn from(value: geo::MultiPolygon) -> Self {
        MultiPolygon::new(value.0.into_iter().map(Polygon::from).collect())
    }
}

impl From<geo::GeometryCollection> for GeometryCollection {
    fn from(value: geo::GeometryCollection) -> Self {
        GeometryCollection::new(value.0.into_iter().map(Geometry::from).collect())
    }
}

/// [`geo::Line`] becomes a two-point LineString; [`geo::Rect`] and [`geo::Triangle`] become
/// Polygons.
impl From<geo::Geometry> for Geometry {
    fn from(value: geo::Geometry) -> Self {
        match value {
            geo::Geometry::Point(g) => Geometry::Point(g.into()),
            geo::Geometry::Line(g) => Geometry::LineString(LineString::new(vec![
                g.start.into(),
                g.end.into(),
            ])),
            geo::Geometry::LineString(g) => Geometry::LineString(g.into()),
            geo::Geometry::Polygon(g) => Geometry::Polygon(g.into()),
            geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(g.into()),
            geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(g.into()),
            geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.into()),
            geo::Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.into()),
            geo::Geometry::Rect(g) => Geometry::Polygon(g.to_polygon().into()),
            geo::Geometry::Triangle(g) => Geometry::Polygon(g.to_polygon().into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geo::geometry_to_geo;
    use crate::test::{geometrycollection, multipolygon, point};

    #[test]
    fn round_trip_through_geo() {
        let geometries: Vec<Geometry> = vec![
            point::p0().into(),
            multipolygon::mp0().into(),
            geometrycollection::gc1().into(),
            Polygon::empty().into(),
        ];
        for geom in geometries {
            let geo_geom = geometry_to_geo(&geom).unwrap();
            assert_eq!(Geometry::from(geo_geom), geom);
        }
    }

    #[test]
    fn rect_becomes_polygon() {
        let rect = geo::Rect::new(geo::coord! { x: 0., y: 0. }, geo::coord! { x: 1., y: 1. });
        let Geometry::Polygon(polygon) = Geometry::from(geo::Geometry::Rect(rect)) else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.num_rings(), 1);
        assert_eq!(polygon.exterior().unwrap().num_coords(), 5);
    }

    #[test]
    fn line_becomes_line_string() {
        let line = geo::Line::new(geo::coord! { x: 0., y: 0. }, geo::coord! { x: 3., y: 4. });
        assert_eq!(
            Geometry::from(geo::Geometry::Line(line)),
            Geometry::LineString(vec![(0., 0.), (3., 4.)].into())
        );
    }

    #[test]
    fn empty_point_has_no_geo_equivalent() {
        assert!(geometry_to_geo(&Point::empty()).is_err());
    }
}
