use serde::{Deserialize, Serialize};

use crate::geometry::LineString;

/// A collection of line strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiLineString(pub Vec<LineString>);

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self(line_strings)
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.0
    }

    pub fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
