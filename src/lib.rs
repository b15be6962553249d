//! Typed geometry values for the boundary between an application and a spatial database.
//!
//! A [`GeometryValue`] holds one of seven 2D geometry kinds, or NULL. It decodes the hex or
//! binary EWKB a database hands over, encodes back to lowercase hex EWKB, describes its column
//! type (`Geometry(Polygon, 4326)`) and renders itself as WKT (`POINT (42 42)`).
//!
//! The codec and formatter live in [`io::wkb`] and [`io::wkt`] and work on any
//! [`GeometryTrait`](geo_traits::GeometryTrait) implementor. With the `postgis` feature,
//! values bind directly to `sqlx` queries against PostGIS.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{GeometryError, Result};
pub use value::{EwkbOptions, GeometryValue};

pub mod datatypes;
pub mod error;
pub mod geo_traits;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
pub mod value;
