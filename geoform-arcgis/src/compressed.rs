//! Decoder of ArcGIS compressed geometry strings.
//!
//! A compressed geometry is a sequence of base-32 integers (digits `0-9a-v`), each one prefixed with its sign, e.g.
//! `+1m91-6fl6e+202gc+0+0`. The first integer is the scale. The rest are pairs of `x`, `y` deltas, each one relative to
//! the previous point (the first one to the origin). The coordinates of a point are its accumulated integer position
//! divided by the scale.

use crate::error::ArcGisError;

const RADIX: u32 = 32;

/// Decodes a compressed geometry string into a list of `[x, y]` pairs.
///
/// ```
/// use geoform_arcgis::compressed::decompress_geometry;
///
/// let points = decompress_geometry("+1m91-6fl6e+202gc+0+0").unwrap();
/// assert_eq!(points, vec![[-122.41946568318791, 37.775011244040655]; 2]);
/// ```
pub fn decompress_geometry(compressed: &str) -> Result<Vec<[f64; 2]>, ArcGisError> {
    let mut tokens = TokenIterator::new(compressed);
    let scale = match tokens.next() {
        Some(scale) => scale?,
        None => return Err(ArcGisError::malformed("compressed geometry is empty")),
    };
    if scale == 0 {
        return Err(ArcGisError::malformed(
            "scale of compressed geometry cannot be 0",
        ));
    }

    let mut points = vec![];
    let mut cursor = (0i64, 0i64);
    while let Some(dx) = tokens.next() {
        let dy = tokens.next().ok_or_else(|| {
            ArcGisError::malformed("compressed geometry has an odd number of coordinate values")
        })?;

        cursor = (
            cursor.0.checked_add(dx?).ok_or_else(overflow)?,
            cursor.1.checked_add(dy?).ok_or_else(overflow)?,
        );
        points.push([cursor.0 as f64 / scale as f64, cursor.1 as f64 / scale as f64]);
    }

    log::debug!(
        "Decompressed {} points from a geometry string of {} characters",
        points.len(),
        compressed.len()
    );

    Ok(points)
}

fn overflow() -> ArcGisError {
    ArcGisError::malformed("coordinate of compressed geometry is out of range")
}

/// Splits the string into signed integers. Stops after the first error.
struct TokenIterator<'a> {
    rest: &'a str,
    can_continue: bool,
}

impl<'a> TokenIterator<'a> {
    fn new(compressed: &'a str) -> Self {
        Self {
            rest: compressed.trim(),
            can_continue: true,
        }
    }

    fn read_token(&mut self) -> Result<i64, ArcGisError> {
        let mut chars = self.rest.chars();
        let negative = match chars.next() {
            Some('+') => false,
            Some('-') => true,
            Some(c) => {
                return Err(ArcGisError::malformed(format!(
                    "expected '+' or '-' in compressed geometry, but found '{c}'"
                )))
            }
            None => return Err(ArcGisError::malformed("unexpected end of compressed geometry")),
        };

        let digits = chars.as_str();
        let end = digits
            .find(|c| c == '+' || c == '-')
            .unwrap_or(digits.len());
        let (token, rest) = digits.split_at(end);
        self.rest = rest;

        if token.is_empty() {
            return Err(ArcGisError::malformed(
                "compressed geometry contains an empty value",
            ));
        }

        let mut value: i64 = 0;
        for c in token.chars() {
            let digit = c.to_digit(RADIX).ok_or_else(|| {
                ArcGisError::malformed(format!("invalid digit '{c}' in compressed geometry"))
            })?;
            value = value
                .checked_mul(RADIX as i64)
                .and_then(|v| v.checked_add(digit as i64))
                .ok_or_else(overflow)?;
        }

        Ok(if negative { -value } else { value })
    }
}

impl Iterator for TokenIterator<'_> {
    type Item = Result<i64, ArcGisError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.can_continue || self.rest.is_empty() {
            return None;
        }

        let result = self.read_token();
        if result.is_err() {
            self.can_continue = false;
        }

        Some(result)
    }
}
