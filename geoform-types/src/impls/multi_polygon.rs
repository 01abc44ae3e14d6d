use serde::{Deserialize, Serialize};

use crate::error::GeoformError;
use crate::impls::Polygon;
use crate::Coordinate;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MultiPolygon {
    parts: Vec<Polygon>,
}

impl MultiPolygon {
    /// Polygons of the set.
    pub fn parts(&self) -> &[Polygon] {
        &self.parts
    }

    /// Iterates over the points of all polygons.
    pub fn coordinates(&self) -> impl Iterator<Item = &'_ Coordinate> {
        self.parts.iter().flat_map(|p| p.coordinates())
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
                .map(|p| p.map_coordinates(f))
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }
}
