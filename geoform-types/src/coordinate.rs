//! See [`Coordinate`].

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::buffer::buffer;
use crate::decimal::to_f64;
use crate::error::GeoformError;
use crate::geo::{Crs, Projection, WebMercator};
use crate::impls::Polygon;

/// A position with exact decimal ordinates.
///
/// `x` and `y` are always present. `z` and `m` are optional and can only be set once. A coordinate carries an optional
/// [`Crs`] tag. Untagged coordinates are considered geographic.
///
/// Equality and hashing only take the ordinates into account, not the CRS tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CoordinateFields")]
pub struct Coordinate {
    x: Decimal,
    y: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    m: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crs: Option<Crs>,
}

#[derive(Deserialize)]
struct CoordinateFields {
    x: Decimal,
    y: Decimal,
    #[serde(default)]
    z: Option<Decimal>,
    #[serde(default)]
    m: Option<Decimal>,
    #[serde(default)]
    crs: Option<Crs>,
}

impl TryFrom<CoordinateFields> for Coordinate {
    type Error = GeoformError;

    fn try_from(value: CoordinateFields) -> Result<Self, Self::Error> {
        let CoordinateFields { x, y, z, m, crs } = value;
        let mut coordinate = Self::new(x, y);
        if let Some(z) = z {
            coordinate = coordinate.with_z(z)?;
        }
        if let Some(m) = m {
            coordinate = coordinate.with_m(m)?;
        }

        Ok(Self { crs, ..coordinate })
    }
}

/// A single ordinate value as it can come from external input.
#[derive(Debug, Clone, PartialEq)]
pub enum Ordinate {
    /// Exact decimal value.
    Decimal(Decimal),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Numeric string, e.g. `"-66.796875"` or `"1.5e3"`.
    Text(String),
}

impl Ordinate {
    /// Converts the value into a decimal.
    pub fn to_decimal(&self) -> Result<Decimal, GeoformError> {
        match self {
            Ordinate::Decimal(v) => Ok(*v),
            Ordinate::Integer(v) => Ok(Decimal::from(*v)),
            Ordinate::Float(v) => Decimal::from_f64(*v)
                .ok_or_else(|| GeoformError::invalid(format!("{v} is not a representable number"))),
            Ordinate::Text(s) => {
                let s = s.trim();
                Decimal::from_str(s)
                    .or_else(|_| Decimal::from_scientific(s))
                    .map_err(|_| GeoformError::invalid(format!("'{s}' is not a number")))
            }
        }
    }

    /// Reads an ordinate from a JSON number or a numeric JSON string.
    pub fn from_json(value: &Value) -> Result<Self, GeoformError> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(v) => Ok(Ordinate::Integer(v)),
                None => n
                    .as_f64()
                    .map(Ordinate::Float)
                    .ok_or_else(|| GeoformError::invalid(format!("{n} is not a representable number"))),
            },
            Value::String(s) => Ok(Ordinate::Text(s.clone())),
            other => Err(GeoformError::invalid(format!("{other} is not a number"))),
        }
    }
}

impl From<Decimal> for Ordinate {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<i64> for Ordinate {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Ordinate {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Ordinate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl Coordinate {
    /// Creates a new 2d coordinate.
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
            crs: None,
        }
    }

    /// Creates a new coordinate with elevation.
    pub fn xyz(x: Decimal, y: Decimal, z: Decimal) -> Self {
        Self {
            z: Some(z),
            ..Self::new(x, y)
        }
    }

    /// Creates a new coordinate with elevation and measure.
    pub fn xyzm(x: Decimal, y: Decimal, z: Decimal, m: Decimal) -> Self {
        Self {
            z: Some(z),
            m: Some(m),
            ..Self::new(x, y)
        }
    }

    /// Creates a coordinate from 2 to 4 ordinates, in `x, y, z, m` order.
    ///
    /// ```
    /// use geoform_types::Coordinate;
    ///
    /// let c = Coordinate::from_ordinates([-66.796875, 20.0390625]).unwrap();
    /// assert_eq!(c.x().to_string(), "-66.796875");
    ///
    /// assert!(Coordinate::from_ordinates([1.0]).is_err());
    /// ```
    pub fn from_ordinates<I, O>(ordinates: I) -> Result<Self, GeoformError>
    where
        I: IntoIterator<Item = O>,
        O: Into<Ordinate>,
    {
        let values = ordinates
            .into_iter()
            .map(|o| o.into().to_decimal())
            .collect::<Result<Vec<_>, _>>()?;

        match values[..] {
            [x, y] => Ok(Self::new(x, y)),
            [x, y, z] => Ok(Self::xyz(x, y, z)),
            [x, y, z, m] => Ok(Self::xyzm(x, y, z, m)),
            _ => Err(GeoformError::invalid(format!(
                "coordinate must have 2 to 4 ordinates, but {} given",
                values.len()
            ))),
        }
    }

    /// Creates a coordinate from 2 to 4 decimal ordinates.
    pub fn from_values(values: &[Decimal]) -> Result<Self, GeoformError> {
        Self::from_ordinates(values.iter().copied())
    }

    /// Creates a coordinate from floating point ordinates.
    pub fn try_from_f64(ordinates: &[f64]) -> Result<Self, GeoformError> {
        Self::from_ordinates(ordinates.iter().copied())
    }

    /// Creates a coordinate from a JSON array of numbers or numeric strings.
    pub fn try_from_json(value: &Value) -> Result<Self, GeoformError> {
        let Value::Array(items) = value else {
            return Err(GeoformError::invalid(format!(
                "coordinate must be an array, but got {value}"
            )));
        };

        Self::from_ordinates(
            items
                .iter()
                .map(Ordinate::from_json)
                .collect::<Result<Vec<_>, _>>()?,
        )
    }

    /// Returns the same coordinate tagged with the given CRS.
    pub fn in_crs(self, crs: Crs) -> Self {
        Self {
            crs: Some(crs),
            ..self
        }
    }

    /// Sets the elevation. Fails if the coordinate already has one.
    pub fn with_z(self, z: Decimal) -> Result<Self, GeoformError> {
        if self.z.is_some() {
            return Err(GeoformError::UnsupportedOperation(
                "z of a coordinate cannot be changed".into(),
            ));
        }

        Ok(Self { z: Some(z), ..self })
    }

    /// Sets the measure. Fails if the coordinate already has one or if it has no elevation.
    pub fn with_m(self, m: Decimal) -> Result<Self, GeoformError> {
        if self.m.is_some() {
            return Err(GeoformError::UnsupportedOperation(
                "m of a coordinate cannot be changed".into(),
            ));
        }
        if self.z.is_none() {
            return Err(GeoformError::invalid("cannot set m of a coordinate without z"));
        }

        Ok(Self { m: Some(m), ..self })
    }

    /// X (longitude for geographic coordinates).
    pub fn x(&self) -> Decimal {
        self.x
    }

    /// Y (latitude for geographic coordinates).
    pub fn y(&self) -> Decimal {
        self.y
    }

    /// Elevation.
    pub fn z(&self) -> Option<Decimal> {
        self.z
    }

    /// Measure.
    pub fn m(&self) -> Option<Decimal> {
        self.m
    }

    /// CRS tag of the coordinate.
    pub fn crs(&self) -> Option<Crs> {
        self.crs
    }

    /// Number of ordinates, from 2 to 4.
    pub fn dimensions(&self) -> usize {
        2 + self.z.is_some() as usize + self.m.is_some() as usize
    }

    /// True if the coordinate is untagged or tagged as geographic.
    pub fn is_geographic(&self) -> bool {
        matches!(self.crs, None | Some(Crs::Geographic))
    }

    /// True if the coordinate is tagged as Web Mercator.
    pub fn is_mercator(&self) -> bool {
        self.crs == Some(Crs::Mercator)
    }

    /// Whether `x` and `y` of the two coordinates are equal.
    pub fn same_position(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Converts a Web Mercator coordinate into longitude and latitude. Geographic coordinates are returned as is.
    pub fn to_geographic(&self) -> Result<Self, GeoformError> {
        if self.is_mercator() {
            WebMercator::default().unproject(self)
        } else {
            Ok(self.clone().in_crs(Crs::Geographic))
        }
    }

    /// Converts a geographic coordinate into Web Mercator. Mercator coordinates are returned as is.
    pub fn to_mercator(&self) -> Result<Self, GeoformError> {
        if self.is_mercator() {
            Ok(self.clone())
        } else {
            WebMercator::default().project(self)
        }
    }

    /// Approximates a circle of `radius` meters around the coordinate. See [`buffer`](crate::buffer::buffer).
    pub fn buffer(&self, radius: Decimal, resolution: usize) -> Result<Polygon, GeoformError> {
        buffer(self, radius, resolution)
    }

    /// Ordinates as floating point numbers, e.g. for GeoJSON output.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        [Some(self.x), Some(self.y), self.z, self.m]
            .into_iter()
            .flatten()
            .map(to_f64)
            .collect()
    }

    pub(crate) fn with_xy(&self, x: Decimal, y: Decimal, crs: Crs) -> Self {
        Self {
            x,
            y,
            z: self.z,
            m: self.m,
            crs: Some(crs),
        }
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z && self.m == other.m
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.z.hash(state);
        self.m.hash(state);
    }
}
