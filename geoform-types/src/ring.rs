//! Ring normalization, winding classification and assembly of polygons from a flat list of rings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::GeoformError;
use crate::geometry::Geometry;
use crate::impls::{LinearRing, MultiPolygon, Polygon};
use crate::Coordinate;

/// Direction in which a ring is traversed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    CounterClockwise,
}

/// Appends the first point to the end of the ring if the ring is not closed yet.
///
/// ```
/// use geoform_types::Coordinate;
/// use geoform_types::ring::close_ring;
///
/// let ring: Vec<_> = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]
///     .iter()
///     .map(|c| Coordinate::try_from_f64(c).unwrap())
///     .collect();
/// let closed = close_ring(ring);
/// assert_eq!(closed.len(), 4);
/// assert_eq!(close_ring(closed.clone()), closed);
/// ```
pub fn close_ring(mut ring: Vec<Coordinate>) -> Vec<Coordinate> {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if first != last => {
            let first = first.clone();
            ring.push(first);
        }
        _ => {}
    }

    ring
}

/// Signed area of the ring by the shoelace formula. Positive for counterclockwise rings (with `y` axis pointing up).
///
/// The ring does not have to be closed, the segment between the last and the first points is always included.
/// Fails if the area does not fit into the decimal range.
pub fn signed_area(ring: &[Coordinate]) -> Result<Decimal, GeoformError> {
    let Some(last) = ring.last() else {
        return Ok(Decimal::ZERO);
    };

    let mut aggr = Decimal::ZERO;
    let mut prev = last;
    for p in ring {
        aggr = prev
            .x()
            .checked_mul(p.y())
            .zip(p.x().checked_mul(prev.y()))
            .and_then(|(a, b)| a.checked_sub(b))
            .and_then(|step| aggr.checked_add(step))
            .ok_or_else(|| GeoformError::invalid("ring is too large to compute its area"))?;
        prev = p;
    }

    Ok(aggr / Decimal::TWO)
}

/// Winding of the ring. Rings with zero area are considered counterclockwise.
pub fn winding(ring: &[Coordinate]) -> Result<Winding, GeoformError> {
    Ok(if signed_area(ring)? < Decimal::ZERO {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    })
}

/// Whether the ring is traversed clockwise.
pub fn is_clockwise(ring: &[Coordinate]) -> Result<bool, GeoformError> {
    Ok(winding(ring)? == Winding::Clockwise)
}

/// Builds a polygon or a multipolygon from a flat list of rings, the way ArcGIS stores them.
///
/// Every ring is closed first. Rings with less than [`LinearRing::MIN_POINTS`] points after closing are dropped.
/// A clockwise ring starts a new polygon, a counterclockwise ring is a hole of the most recently started polygon.
/// A counterclockwise ring that comes before any clockwise one is reversed and becomes a shell itself.
///
/// Returns a [`Geometry::Polygon`] if there is one shell, a [`Geometry::MultiPolygon`] if there are several, and
/// `None` if no valid rings are left.
pub fn assemble_rings<I>(rings: I) -> Result<Option<Geometry>, GeoformError>
where
    I: IntoIterator<Item = Vec<Coordinate>>,
{
    Ok(rings
        .into_iter()
        .try_fold(RingAssembly::default(), RingAssembly::push)?
        .finish())
}

#[derive(Debug, Default)]
struct RingAssembly {
    completed: Vec<Polygon>,
    current: Option<(LinearRing, Vec<LinearRing>)>,
}

impl RingAssembly {
    fn push(mut self, ring: Vec<Coordinate>) -> Result<Self, GeoformError> {
        let ring = close_ring(ring);
        if ring.len() < LinearRing::MIN_POINTS {
            log::debug!("Dropping degenerate ring with {} points", ring.len());
            return Ok(self);
        }

        let ring = LinearRing::new(ring)?;
        match ring.winding()? {
            Winding::Clockwise => {
                if let Some((shell, holes)) = self.current.replace((ring, vec![])) {
                    self.completed.push(Polygon::from_parts(shell, holes));
                }
            }
            Winding::CounterClockwise => {
                if let Some((_, holes)) = self.current.as_mut() {
                    holes.push(ring);
                } else {
                    log::debug!("Ring without an outer ring is used as a shell");
                    self.current = Some((ring.reversed(), vec![]));
                }
            }
        }

        Ok(self)
    }

    fn finish(self) -> Option<Geometry> {
        let RingAssembly {
            mut completed,
            current,
        } = self;
        if let Some((shell, holes)) = current {
            completed.push(Polygon::from_parts(shell, holes));
        }

        match completed.len() {
            0 => None,
            1 => completed.pop().map(Geometry::Polygon),
            _ => Some(Geometry::MultiPolygon(MultiPolygon::from(completed))),
        }
    }
}
