use serde::{Deserialize, Serialize};

use crate::geometry::LineString;

/// A polygon made of rings: the first ring is the exterior, the others are holes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        let mut rings = Vec::with_capacity(1 + interiors.len());
        rings.push(exterior);
        rings.extend(interiors);
        Self { rings }
    }

    /// Build a polygon from its rings, exterior first.
    pub fn from_rings(rings: Vec<LineString>) -> Self {
        Self { rings }
    }

    /// A polygon without any ring
    pub fn empty() -> Self {
        Self { rings: vec![] }
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// All rings, exterior first
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon::{p0, p1};

    #[test]
    fn exterior_and_holes() {
        let polygon = p1();
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.exterior(), polygon.rings().first());
        assert_eq!(polygon.interiors().len(), 1);
        assert!(p0().interiors().is_empty());
    }

    #[test]
    fn empty_polygon_has_no_exterior() {
        let polygon = Polygon::empty();
        assert!(polygon.exterior().is_none());
        assert!(polygon.interiors().is_empty());
    }
}
