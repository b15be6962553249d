use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// An ordered, heterogeneous collection of geometries. Collections may nest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<G: Into<Geometry>> FromIterator<G> for GeometryCollection {
    fn from_iter<I: IntoIterator<Item = G>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
