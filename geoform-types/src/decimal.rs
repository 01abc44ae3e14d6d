//! High precision elementary functions over [`Decimal`].
//!
//! `rust_decimal` gives exact decimal arithmetic with 28 significant digits but no transcendental functions with a
//! controllable precision. Projection formulas need `sin`, `atan`, `exp` and `ln`, and repeated reprojection of the
//! same coordinates must not drift, so the functions below evaluate their series until the next term drops below
//! `10^-PRECISION`.
//!
//! All functions return `None` if an intermediate value does not fit into [`Decimal`] or if the argument is outside
//! of the function domain.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Number of fractional digits the series are evaluated to.
pub const PRECISION: u32 = 24;

const MAX_TERMS: u64 = 512;

/// π with 28 fractional digits.
pub fn pi() -> Decimal {
    Decimal::from_i128_with_scale(31_415_926_535_897_932_384_626_433_833, 28)
}

/// π / 2.
pub fn half_pi() -> Decimal {
    pi() / Decimal::TWO
}

fn two_pi() -> Decimal {
    pi() * Decimal::TWO
}

fn epsilon() -> Decimal {
    Decimal::new(1, PRECISION)
}

/// Converts degrees into radians.
pub fn to_radians(degrees: Decimal) -> Option<Decimal> {
    degrees
        .checked_mul(pi())?
        .checked_div(Decimal::from(180))
}

/// Converts radians into degrees.
pub fn to_degrees(radians: Decimal) -> Option<Decimal> {
    radians
        .checked_mul(Decimal::from(180))?
        .checked_div(pi())
}

/// Lossy conversion used at the edges of the crate (GeoJSON output, `geo-types` interop).
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Brings an angle in radians into `[-π, π]`.
fn reduce_angle(x: Decimal) -> Option<Decimal> {
    let two_pi = two_pi();
    let mut r = x.checked_rem(two_pi)?;
    if r > pi() {
        r -= two_pi;
    } else if r < -pi() {
        r += two_pi;
    }

    Some(r)
}

/// Sine of an angle in radians.
pub fn sin(x: Decimal) -> Option<Decimal> {
    let x = reduce_angle(x)?;
    let x2 = x.checked_mul(x)?;
    let eps = epsilon();

    let mut term = x;
    let mut sum = x;
    for n in 1..MAX_TERMS {
        let divisor = Decimal::from((2 * n) * (2 * n + 1));
        term = -term.checked_mul(x2)?.checked_div(divisor)?;
        sum = sum.checked_add(term)?;
        if term.abs() < eps {
            break;
        }
    }

    Some(sum)
}

/// Cosine of an angle in radians.
pub fn cos(x: Decimal) -> Option<Decimal> {
    let x = reduce_angle(x)?;
    let x2 = x.checked_mul(x)?;
    let eps = epsilon();

    let mut term = Decimal::ONE;
    let mut sum = Decimal::ONE;
    for n in 1..MAX_TERMS {
        let divisor = Decimal::from((2 * n - 1) * (2 * n));
        term = -term.checked_mul(x2)?.checked_div(divisor)?;
        sum = sum.checked_add(term)?;
        if term.abs() < eps {
            break;
        }
    }

    Some(sum)
}

/// `e^x`.
pub fn exp(x: Decimal) -> Option<Decimal> {
    if x.is_zero() {
        return Some(Decimal::ONE);
    }

    if x.is_sign_negative() {
        return Decimal::ONE.checked_div(exp(-x)?);
    }

    // exp(x) = exp(x / 2^k) ^ (2^k)
    let half = Decimal::new(5, 1);
    let mut r = x;
    let mut squarings = 0;
    while r > half {
        r /= Decimal::TWO;
        squarings += 1;
    }

    let eps = epsilon();
    let mut term = Decimal::ONE;
    let mut sum = Decimal::ONE;
    for n in 1..MAX_TERMS {
        term = term.checked_mul(r)?.checked_div(Decimal::from(n))?;
        sum = sum.checked_add(term)?;
        if term < eps {
            break;
        }
    }

    for _ in 0..squarings {
        sum = sum.checked_mul(sum)?;
    }

    Some(sum)
}

/// `2 * atanh(s)` for `|s| < 1`, which is `ln((1 + s) / (1 - s))`.
fn ln_series(s: Decimal) -> Option<Decimal> {
    let s2 = s.checked_mul(s)?;
    let eps = epsilon();

    let mut power = s;
    let mut sum = s;
    for n in 1..MAX_TERMS {
        power = power.checked_mul(s2)?;
        let term = power.checked_div(Decimal::from(2 * n + 1))?;
        sum = sum.checked_add(term)?;
        if term.abs() < eps {
            break;
        }
    }

    sum.checked_mul(Decimal::TWO)
}

/// Natural logarithm.
pub fn ln(x: Decimal) -> Option<Decimal> {
    if x <= Decimal::ZERO {
        return None;
    }

    // x = m * 2^k with m in [0.5, 2]
    let half = Decimal::new(5, 1);
    let mut m = x;
    let mut k: i64 = 0;
    while m > Decimal::TWO {
        m /= Decimal::TWO;
        k += 1;
    }
    while m < half {
        m *= Decimal::TWO;
        k -= 1;
    }

    let s = (m - Decimal::ONE).checked_div(m + Decimal::ONE)?;
    let ln_m = ln_series(s)?;
    if k == 0 {
        return Some(ln_m);
    }

    // ln(2) = 2 * atanh(1/3)
    let ln2 = ln_series(Decimal::ONE / Decimal::from(3))?;
    Decimal::from(k).checked_mul(ln2)?.checked_add(ln_m)
}

/// Square root, by Newton iterations.
pub fn sqrt(x: Decimal) -> Option<Decimal> {
    if x.is_sign_negative() && !x.is_zero() {
        return None;
    }
    if x.is_zero() {
        return Some(Decimal::ZERO);
    }

    let mut guess = x
        .to_f64()
        .and_then(|v| Decimal::from_f64(v.sqrt()))
        .filter(|v| !v.is_zero())
        .unwrap_or(Decimal::ONE);

    let eps = epsilon();
    for _ in 0..MAX_TERMS {
        let next = guess.checked_add(x.checked_div(guess)?)? / Decimal::TWO;
        let delta = (next - guess).abs();
        guess = next;
        if delta < eps {
            break;
        }
    }

    Some(guess)
}

/// Arctangent, in radians.
pub fn atan(x: Decimal) -> Option<Decimal> {
    if x.is_sign_negative() {
        return atan(-x).map(|v| -v);
    }

    if x > Decimal::ONE {
        return Some(half_pi() - atan(Decimal::ONE.checked_div(x)?)?);
    }

    // atan(x) = 2 * atan(x / (1 + sqrt(1 + x^2)))
    let limit = Decimal::new(2, 1);
    let mut r = x;
    let mut doublings = 0u32;
    while r > limit {
        let denominator = Decimal::ONE + sqrt(Decimal::ONE + r * r)?;
        r = r.checked_div(denominator)?;
        doublings += 1;
    }

    let r2 = r * r;
    let eps = epsilon();
    let mut power = r;
    let mut sum = r;
    for n in 1..MAX_TERMS {
        power = -power.checked_mul(r2)?;
        let term = power.checked_div(Decimal::from(2 * n + 1))?;
        sum = sum.checked_add(term)?;
        if term.abs() < eps {
            break;
        }
    }

    Some(sum * Decimal::from(2u64.pow(doublings)))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn d(v: f64) -> Decimal {
        Decimal::from_f64(v).unwrap()
    }

    #[test]
    fn trigonometry() {
        for v in [-7.5, -3.0, -1.0, -0.1, 0.0, 0.3, 1.0, 2.5, 3.14, 10.0] {
            assert_abs_diff_eq!(to_f64(sin(d(v)).unwrap()), v.sin(), epsilon = 1e-12);
            assert_abs_diff_eq!(to_f64(cos(d(v)).unwrap()), v.cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn sin_of_pi_is_zero() {
        assert!(sin(pi()).unwrap().abs() < Decimal::new(1, 20));
        assert!((sin(half_pi()).unwrap() - Decimal::ONE).abs() < Decimal::new(1, 20));
    }

    #[test]
    fn exponent_and_logarithm() {
        for v in [-3.5, -1.0, -0.01, 0.0, 0.5, 1.0, 3.0, 12.0] {
            assert_abs_diff_eq!(to_f64(exp(d(v)).unwrap()), v.exp(), epsilon = 1e-9);
        }

        for v in [1e-6, 0.2, 1.0, 2.0, 524.0, 1e9] {
            assert_abs_diff_eq!(to_f64(ln(d(v)).unwrap()), v.ln(), epsilon = 1e-12);
        }

        assert_eq!(ln(Decimal::ZERO), None);
        assert_eq!(ln(d(-1.0)), None);
    }

    #[test]
    fn ln_inverts_exp() {
        let x = Decimal::new(12345, 4);
        let back = ln(exp(x).unwrap()).unwrap();
        assert!((back - x).abs() < Decimal::new(1, 20));
    }

    #[test]
    fn square_root() {
        assert_eq!(sqrt(Decimal::from(4)).unwrap().round_dp(20), Decimal::TWO);
        assert_abs_diff_eq!(to_f64(sqrt(Decimal::TWO).unwrap()), 2f64.sqrt(), epsilon = 1e-15);
        assert_eq!(sqrt(d(-2.0)), None);
    }

    #[test]
    fn arctangent() {
        for v in [-50.0, -1.0, -0.5, 0.0, 0.1, 0.5, 0.99, 1.0, 3.0, 1e6] {
            assert_abs_diff_eq!(to_f64(atan(d(v)).unwrap()), v.atan(), epsilon = 1e-12);
        }
    }

    #[test]
    fn angle_conversion() {
        let tolerance = Decimal::new(1, 24);
        assert!((to_radians(Decimal::from(180)).unwrap() - pi()).abs() < tolerance);
        assert!((to_degrees(pi()).unwrap() - Decimal::from(180)).abs() < tolerance);
        assert!((to_degrees(to_radians(d(-66.796875)).unwrap()).unwrap() - d(-66.796875)).abs() < tolerance);
    }
}
