use std::io::Write;

use crate::error::Result;
use crate::geo_traits::{GeometryTrait, GeometryType};
use crate::io::wkb::writer::{
    geometry_collection_wkb_size, line_string_wkb_size, multi_line_string_wkb_size,
    multi_point_wkb_size, multi_polygon_wkb_size, point_wkb_size, polygon_wkb_size,
    write_geometry_collection_as_wkb, write_line_string_as_wkb, write_multi_line_string_as_wkb,
    write_multi_point_as_wkb, write_multi_polygon_as_wkb, write_point_as_wkb,
    write_polygon_as_wkb,
};

/// The byte length of a Geometry
pub fn geometry_wkb_size(geom: &(impl GeometryTrait + ?Sized), srid: Option<i32>) -> usize {
    use GeometryType::*;
    match geom.as_type() {
        Point(_) => point_wkb_size(srid),
        LineString(ls) => line_string_wkb_size(ls, srid),
        Polygon(p) => polygon_wkb_size(p, srid),
        MultiPoint(mp) => multi_point_wkb_size(mp, srid),
        MultiLineString(ml) => multi_line_string_wkb_size(ml, srid),
        MultiPolygon(mp) => multi_polygon_wkb_size(mp, srid),
        GeometryCollection(gc) => geometry_collection_wkb_size(gc, srid),
    }
}

/// Write a Geometry to a Writer encoded as WKB, flagging an SRID when one is given
pub fn write_geometry_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &(impl GeometryTrait + ?Sized),
    srid: Option<i32>,
) -> Result<()> {
    use GeometryType::*;
    match geom.as_type() {
        Point(p) => write_point_as_wkb(writer, p, srid),
        LineString(ls) => write_line_string_as_wkb(writer, ls, srid),
        Polygon(p) => write_polygon_as_wkb(writer, p, srid),
        MultiPoint(mp) => write_multi_point_as_wkb(writer, mp, srid),
        MultiLineString(ml) => write_multi_line_string_as_wkb(writer, ml, srid),
        MultiPolygon(mp) => write_multi_polygon_as_wkb(writer, mp, srid),
        GeometryCollection(gc) => write_geometry_collection_as_wkb(writer, gc, srid),
    }
}

/// Write a Geometry to a Writer encoded as EWKB with the given SRID
pub fn write_geometry_as_ewkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &(impl GeometryTrait + ?Sized),
    srid: i32,
) -> Result<()> {
    write_geometry_as_wkb(writer, geom, Some(srid))
}
