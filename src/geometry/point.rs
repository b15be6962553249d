use serde::{Deserialize, Serialize};

use crate::geometry::Coord;

/// A single position, or an empty point when no coordinate has been set.
///
/// An empty point has no layout and cannot be written as EWKB or WKT.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point(Option<Coord>);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Some(Coord { x, y }))
    }

    /// A point without coordinates
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn coord(&self) -> Option<Coord> {
        self.0
    }

    pub fn x(&self) -> Option<f64> {
        self.0.map(|c| c.x)
    }

    pub fn y(&self) -> Option<f64> {
        self.0.map(|c| c.y)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self(Some(value))
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self(Some(value.into()))
    }
}
