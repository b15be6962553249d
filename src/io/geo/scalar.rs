use crate::error::{GeometryError, Result};
use crate::geo_traits::{GeometryTrait, GeometryType};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// Convert a coordinate to a [`geo::Coord`].
pub fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x,
        y: coord.y,
    }
}

/// Convert a Point to a [`geo::Point`].
///
/// [`geo`] has no empty point, so an empty point is an error.
pub fn point_to_geo(point: &Point) -> Result<geo::Point> {
    point
        .coord()
        .map(|coord| geo::Point(coord_to_geo(&coord)))
        .ok_or_else(|| GeometryError::UnsupportedLayout("point has no coordinates".to_string()))
}

/// Convert a LineString to a [`geo::LineString`].
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    geo::LineString::new(line_string.coords().iter().map(coord_to_geo).collect())
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// A polygon without rings becomes a polygon with an empty exterior.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(line_string_to_geo)
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(line_string_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`].
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> Result<geo::MultiPoint> {
    multi_point
        .points()
        .iter()
        .map(point_to_geo)
        .collect::<Result<Vec<_>>>()
        .map(geo::MultiPoint::new)
}

/// Convert a MultiLineString to a [`geo::MultiLineString`].
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a MultiPolygon to a [`geo::MultiPolygon`].
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(multi_polygon.polygons().iter().map(polygon_to_geo).collect())
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`].
pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> Result<geo::GeometryCollection> {
    geometry_collection
        .geometries()
        .iter()
        .map(geometry_to_geo)
        .collect::<Result<Vec<_>>>()
        .map(geo::GeometryCollection::new_from)
}

/// Convert any Geometry to a [`geo::Geometry`].
pub fn geometry_to_geo(geometry: &(impl GeometryTrait + ?Sized)) -> Result<geo::Geometry> {
    use GeometryType::*;
    let geom = match geometry.as_type() {
        Point(g) => geo::Geometry::Point(point_to_geo(g)?),
        LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)),
        Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)?),
        MultiLineString(g) => geo::Geometry::MultiLineString(multi_line_string_to_geo(g)),
        MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        GeometryCollection(g) => geo::Geometry::GeometryCollection(geometry_collection_to_geo(g)?),
    };
    Ok(geom)
}

impl TryFrom<&Geometry> for geo::Geometry {
    type Error = GeometryError;

    fn try_from(value: &Geometry) -> Result<Self> {
        geometry_to_geo(value)
    }
}
