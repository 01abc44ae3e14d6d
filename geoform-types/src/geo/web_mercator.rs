use rust_decimal::Decimal;

use crate::decimal::{atan, exp, half_pi, ln, sin, to_degrees, to_radians};
use crate::error::GeoformError;
use crate::geo::{Crs, Datum, Projection};
use crate::Coordinate;

/// Spherical Web Mercator projection. Input is geographic, output is in meters.
#[derive(Debug, Copy, Clone, Default)]
pub struct WebMercator {
    datum: Datum,
}

impl WebMercator {
    /// Creates a projection on the sphere with the semimajor axis of the given datum.
    pub fn new(datum: Datum) -> Self {
        Self { datum }
    }
}

fn out_of_range(what: &str, input: &Coordinate) -> GeoformError {
    GeoformError::Projection(format!(
        "{what} of ({}, {}) is out of representable range",
        input.x(),
        input.y()
    ))
}

/// Wraps longitude into `[-180, 180)`.
fn normalize_longitude(lon: Decimal) -> Decimal {
    let full_turn = Decimal::from(360);
    lon - ((lon + Decimal::from(180)) / full_turn).floor() * full_turn
}

impl Projection for WebMercator {
    type InPoint = Coordinate;
    type OutPoint = Coordinate;

    fn project(&self, input: &Self::InPoint) -> Result<Self::OutPoint, GeoformError> {
        if input.y().abs() >= Decimal::from(90) {
            return Err(GeoformError::Projection(format!(
                "latitude {} has no Web Mercator equivalent",
                input.y()
            )));
        }

        let radius = self.datum.semimajor();
        let x = to_radians(input.x())
            .and_then(|lon| lon.checked_mul(radius))
            .ok_or_else(|| out_of_range("x", input))?;

        let sin_lat = to_radians(input.y())
            .and_then(sin)
            .ok_or_else(|| out_of_range("latitude sine", input))?;
        let y = (Decimal::ONE + sin_lat)
            .checked_div(Decimal::ONE - sin_lat)
            .and_then(ln)
            .and_then(|v| v.checked_mul(radius / Decimal::TWO))
            .ok_or_else(|| {
                GeoformError::Projection(format!(
                    "latitude {} has no Web Mercator equivalent",
                    input.y()
                ))
            })?;

        Ok(input.with_xy(x, y, Crs::Mercator))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Result<Self::InPoint, GeoformError> {
        let radius = self.datum.semimajor();
        let lon = input
            .x()
            .checked_div(radius)
            .and_then(to_degrees)
            .ok_or_else(|| out_of_range("longitude", input))?;

        let lat = (-input.y())
            .checked_div(radius)
            .and_then(exp)
            .and_then(atan)
            .and_then(|a| half_pi().checked_sub(a * Decimal::TWO))
            .and_then(to_degrees)
            .ok_or_else(|| out_of_range("latitude", input))?;

        Ok(input.with_xy(normalize_longitude(lon), lat, Crs::Geographic))
    }
}
