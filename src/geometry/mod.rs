//! The in-memory geometry model: seven kinds of 2D geometry in one closed enum.

mod coord;
mod geometry_collection;
mod linestring;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;

pub use coord::Coord;
pub use geometry_collection::GeometryCollection;
pub use linestring::LineString;
pub use multi_linestring::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

use serde::{Deserialize, Serialize};

/// Any of the supported geometry kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

macro_rules! impl_from_variant {
    ($struct_name:ident) => {
        impl From<$struct_name> for Geometry {
            fn from(value: $struct_name) -> Self {
                Geometry::$struct_name(value)
            }
        }
    };
}

impl_from_variant!(Point);
impl_from_variant!(LineString);
impl_from_variant!(Polygon);
impl_from_variant!(MultiPoint);
impl_from_variant!(MultiLineString);
impl_from_variant!(MultiPolygon);
impl_from_variant!(GeometryCollection);
