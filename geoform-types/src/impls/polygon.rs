use serde::{Deserialize, Serialize};

use crate::error::GeoformError;
use crate::impls::LinearRing;
use crate::Coordinate;

/// Polygon consists of one outer ring (shell) and zero or more inner rings (holes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "Vec<LinearRing>", into = "Vec<LinearRing>")]
pub struct Polygon {
    rings: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a new polygon. The first ring is the shell, the rest are holes. Fails if no rings are given.
    pub fn new(rings: Vec<LinearRing>) -> Result<Self, GeoformError> {
        if rings.is_empty() {
            return Err(GeoformError::invalid("polygon must have at least one ring"));
        }

        Ok(Self { rings })
    }

    /// Creates a polygon from its shell and holes.
    pub fn from_parts(shell: LinearRing, holes: Vec<LinearRing>) -> Self {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(shell);
        rings.extend(holes);
        Self { rings }
    }

    /// Outer ring.
    pub fn shell(&self) -> &LinearRing {
        &self.rings[0]
    }

    /// Inner rings.
    pub fn holes(&self) -> &[LinearRing] {
        &self.rings[1..]
    }

    /// All rings starting with the shell.
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    /// Iterates over the points of all rings.
    pub fn coordinates(&self) -> impl Iterator<Item = &'_ Coordinate> {
        self.rings.iter().flat_map(|r| r.iter())
    }

    /// Creates a new polygon by converting every point with `f`.
    pub fn map_coordinates(
        &self,
        f: &mut impl FnMut(&Coordinate) -> Result<Coordinate, GeoformError>,
    ) -> Result<Self, GeoformError> {
        Ok(Self {
            rings: self
                .rings
                .iter()
                .map(|r| r.map_coordinates(f))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Reprojects the polygon into geographic coordinates.
    pub fn to_geographic(&self) -> Result<Self, GeoformError> {
        self.map_coordinates(&mut Coordinate::to_geographic)
    }

    /// Reprojects the polygon into Web Mercator.
    pub fn to_mercator(&self) -> Result<Self, GeoformError> {
        self.map_coordinates(&mut Coordinate::to_mercator)
    }
}

impl From<LinearRing> for Polygon {
    fn from(value: LinearRing) -> Self {
        Self { rings: vec![value] }
    }
}

impl TryFrom<Vec<LinearRing>> for Polygon {
    type Error = GeoformError;

    fn try_from(value: Vec<LinearRing>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Polygon> for Vec<LinearRing> {
    fn from(value: Polygon) -> Self {
        value.rings
    }
}
