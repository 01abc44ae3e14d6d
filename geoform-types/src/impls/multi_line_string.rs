use serde::{Deserialize, Serialize};

use crate::error::GeoformError;
use crate::impls::LineString;
use crate::Coordinate;

/// A set of line strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MultiLineString {
    parts: Vec<LineString>,
}

impl MultiLineString {
    /// Lines of the set.
    pub fn parts(&self) -> &[LineString] {
        &self.parts
    }

    /// Iterates over the points of all lines.
    pub fn coordinates(&self) -> impl Iterator<Item = &'_ Coordinate> {
        self.parts.iter().flat_map(|l| l.iter())
    }

    /// Creates a new set by converting every point with `f`.
    pub fn map_coordinates(
        &self,
        f: &mut impl FnMut(&Coordinate) -> Result<Coordinate, GeoformError>,
    ) -> Result<Self, GeoformError> {
        Ok(Self {
            parts: self
                .parts
                .iter()
                .map(|l| l.map_coordinates(f))
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(parts: Vec<LineString>) -> Self {
        Self { parts }
    }
}
