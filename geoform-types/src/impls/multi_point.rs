use serde::{Deserialize, Serialize};

use crate::error::GeoformError;
use crate::Coordinate;

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MultiPoint(Vec<Coordinate>);

impl MultiPoint {
    /// Points of the set.
    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    /// Creates a new set by converting every point with `f`.
    pub fn map_coordinates(
        &self,
        f: &mut impl FnMut(&Coordinate) -> Result<Coordinate, GeoformError>,
    ) -> Result<Self, GeoformError> {
        Ok(Self(self.0.iter().map(f).collect::<Result<_, _>>()?))
    }
}

impl From<Vec<Coordinate>> for MultiPoint {
    fn from(value: Vec<Coordinate>) -> Self {
        Self(value)
    }
}
