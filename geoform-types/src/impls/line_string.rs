use serde::{Deserialize, Serialize};

use crate::error::GeoformError;
use crate::ring::{close_ring, winding, Winding};
use crate::Coordinate;

/// Sequence of at least two coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct LineString {
    points: Vec<Coordinate>,
}

impl std::ops::Deref for LineString {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl LineString {
    /// Creates a new line string. Fails if less than two points are given.
    pub fn new(points: Vec<Coordinate>) -> Result<Self, GeoformError> {
        if points.len() < 2 {
            return Err(GeoformError::invalid(format!(
                "line string must have at least 2 points, but has {}",
                points.len()
            )));
        }

        Ok(Self { points })
    }

    /// Points of the line.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Takes the points out of the line.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Whether the first and the last points are the same.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Creates a new line by converting every point with `f`.
    pub fn map_coordinates(
        &self,
        f: &mut impl FnMut(&Coordinate) -> Result<Coordinate, GeoformError>,
    ) -> Result<Self, GeoformError> {
        Self::new(self.points.iter().map(f).collect::<Result<_, _>>()?)
    }
}

impl TryFrom<Vec<Coordinate>> for LineString {
    type Error = GeoformError;

    fn try_from(value: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineString> for Vec<Coordinate> {
    fn from(value: LineString) -> Self {
        value.points
    }
}

/// Closed sequence of at least four coordinates, the first and the last of which are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct LinearRing {
    points: Vec<Coordinate>,
}

impl std::ops::Deref for LinearRing {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl LinearRing {
    /// Minimum number of points in a ring, including the repeated first point.
    pub const MIN_POINTS: usize = 4;

    /// Creates a new ring. Fails if the points are not closed or there are less than
    /// [`MIN_POINTS`](Self::MIN_POINTS) of them.
    pub fn new(points: Vec<Coordinate>) -> Result<Self, GeoformError> {
        if points.len() < Self::MIN_POINTS {
            return Err(GeoformError::invalid(format!(
                "ring must have at least {} points, but has {}",
                Self::MIN_POINTS,
                points.len()
            )));
        }

        if points.first() != points.last() {
            return Err(GeoformError::invalid("ring is not closed"));
        }

        Ok(Self { points })
    }

    /// Closes the points if needed and creates a ring of them.
    pub fn close(points: Vec<Coordinate>) -> Result<Self, GeoformError> {
        Self::new(close_ring(points))
    }

    /// Points of the ring. The last point is the same as the first one.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Takes the points out of the ring.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Winding of the ring. Fails if the ring area does not fit into the decimal range.
    pub fn winding(&self) -> Result<Winding, GeoformError> {
        winding(&self.points)
    }

    /// Same ring traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().cloned().collect(),
        }
    }

    /// Creates a new ring by converting every point with `f`.
    pub fn map_coordinates(
        &self,
        f: &mut impl FnMut(&Coordinate) -> Result<Coordinate, GeoformError>,
    ) -> Result<Self, GeoformError> {
        Self::new(self.points.iter().map(f).collect::<Result<_, _>>()?)
    }
}

impl TryFrom<Vec<Coordinate>> for LinearRing {
    type Error = GeoformError;

    fn try_from(value: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LinearRing> for Vec<Coordinate> {
    fn from(value: LinearRing) -> Self {
        value.points
    }
}

impl From<LinearRing> for LineString {
    fn from(value: LinearRing) -> Self {
        Self {
            points: value.points,
        }
    }
}
