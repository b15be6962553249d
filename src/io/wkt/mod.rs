//! Render geometries as OGC Simple Features Well-Known Text.

mod writer;

pub use writer::{write_geometry, ToWkt};
