//! Reading and writing EWKB-encoded geometries, the format PostGIS uses for `geometry` values.
//!
//! Output is always little-endian with the SRID flag set. Input may use either byte order and
//! may omit the SRID.

mod api;
pub mod common;
pub(crate) mod reader;
pub mod writer;

pub use api::{from_ewkb, from_hex_ewkb, to_ewkb, to_hex_ewkb};
