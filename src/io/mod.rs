//! Encoders and decoders between geometries and their EWKB and WKT forms, plus
//! interoperability with the `geo` crate.

pub mod geo;
#[cfg(feature = "postgis")]
pub mod postgis;
pub mod wkb;
pub mod wkt;
