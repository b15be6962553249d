use serde::{Deserialize, Serialize};

use crate::geometry::Coord;

/// An ordered sequence of coordinates.
///
/// Also used for polygon rings, which are expected (but not checked) to be closed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineString(pub Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C: Into<Coord>> From<Vec<C>> for LineString {
    fn from(value: Vec<C>) -> Self {
        Self(value.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<Coord>> FromIterator<C> for LineString {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
