//! Circular buffers around points.

use rust_decimal::Decimal;

use crate::decimal::{cos, pi, sin};
use crate::error::GeoformError;
use crate::geo::Crs;
use crate::impls::{LinearRing, Polygon};
use crate::Coordinate;

/// Number of segments used to approximate a circle when no resolution is given.
pub const DEFAULT_BUFFER_RESOLUTION: usize = 64;

/// Approximates a circle of `radius` around `center` with a polygon of `resolution` segments.
///
/// The circle is built in Web Mercator, so `radius` is in Mercator meters, and the polygon is then converted into
/// geographic coordinates. The `k`-th vertex lies at the angle of `k * 360 / resolution` degrees, `k = 1..=resolution`.
pub fn buffer(
    center: &Coordinate,
    radius: Decimal,
    resolution: usize,
) -> Result<Polygon, GeoformError> {
    if resolution < 3 {
        return Err(GeoformError::invalid(format!(
            "buffer resolution must be at least 3, but is {resolution}"
        )));
    }
    if radius.is_sign_negative() {
        return Err(GeoformError::invalid(format!(
            "buffer radius cannot be negative, but is {radius}"
        )));
    }

    let center = center.to_mercator()?;
    let step = Decimal::TWO * pi() / Decimal::from(resolution);
    let numeric = |what: &str| {
        GeoformError::Projection(format!("{what} of buffer vertex is out of representable range"))
    };

    let mut points = Vec::with_capacity(resolution + 1);
    for k in 1..=resolution {
        let angle = step * Decimal::from(k);
        let dx = cos(angle)
            .and_then(|v| v.checked_mul(radius))
            .ok_or_else(|| numeric("x"))?;
        let dy = sin(angle)
            .and_then(|v| v.checked_mul(radius))
            .ok_or_else(|| numeric("y"))?;
        let x = center.x().checked_add(dx).ok_or_else(|| numeric("x"))?;
        let y = center.y().checked_add(dy).ok_or_else(|| numeric("y"))?;

        points.push(Coordinate::new(x, y).in_crs(Crs::Mercator));
    }

    if let Some(first) = points.first().cloned() {
        points.push(first);
    }

    Polygon::from(LinearRing::new(points)?).to_geographic()
}
