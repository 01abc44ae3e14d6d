//! Convex hull of a set of points.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::error::GeoformError;
use crate::impls::{LinearRing, Polygon};
use crate::Coordinate;

/// Cross product of vectors `o -> a` and `o -> b`. Positive if `o, a, b` make a counterclockwise turn.
fn cross(o: &Coordinate, a: &Coordinate, b: &Coordinate) -> Result<Decimal, GeoformError> {
    checked_cross(o, a, b)
        .ok_or_else(|| GeoformError::invalid("coordinates are too large to compute a convex hull"))
}

fn checked_cross(o: &Coordinate, a: &Coordinate, b: &Coordinate) -> Option<Decimal> {
    let ax = a.x().checked_sub(o.x())?;
    let ay = a.y().checked_sub(o.y())?;
    let bx = b.x().checked_sub(o.x())?;
    let by = b.y().checked_sub(o.y())?;

    ax.checked_mul(by)?.checked_sub(ay.checked_mul(bx)?)
}

fn by_position(a: &&Coordinate, b: &&Coordinate) -> Ordering {
    a.x().cmp(&b.x()).then_with(|| a.y().cmp(&b.y()))
}

/// Pushes points into the chain, keeping only left turns.
fn chain<'a>(
    points: impl Iterator<Item = &'a Coordinate>,
) -> Result<Vec<&'a Coordinate>, GeoformError> {
    let mut chain: Vec<&Coordinate> = vec![];
    for p in points {
        while let [.., a, b] = chain[..] {
            if cross(a, b, p)? > Decimal::ZERO {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }

    Ok(chain)
}

/// Computes the convex hull of the points with Andrew's monotone chain algorithm.
///
/// The result is a closed counterclockwise ring. Degenerate inputs give degenerate rings:
/// * no points - empty vector,
/// * one distinct point - the point repeated twice,
/// * two distinct points or collinear points - the two extreme points, closed: `[a, b, a]`.
///
/// Points are compared by `x` and `y` only. Fails if the points are so far apart that the turn direction
/// cannot be computed within the decimal range.
pub fn convex_hull<'a>(
    points: impl IntoIterator<Item = &'a Coordinate>,
) -> Result<Vec<Coordinate>, GeoformError> {
    let mut sorted: Vec<&Coordinate> = points.into_iter().collect();
    sorted.sort_by(by_position);
    sorted.dedup_by(|a, b| a.same_position(*b));

    let hull: Vec<&Coordinate> = match sorted.len() {
        0 => return Ok(vec![]),
        1 => vec![sorted[0]],
        _ => {
            let mut lower = chain(sorted.iter().copied())?;
            let mut upper = chain(sorted.iter().rev().copied())?;
            lower.pop();
            upper.pop();
            lower.extend(upper);
            lower
        }
    };

    let mut ring: Vec<Coordinate> = hull.into_iter().cloned().collect();
    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }

    Ok(ring)
}

/// Convex hull as a polygon, or `None` if the points do not enclose any area.
pub fn hull_polygon<'a>(
    points: impl IntoIterator<Item = &'a Coordinate>,
) -> Result<Option<Polygon>, GeoformError> {
    Ok(LinearRing::new(convex_hull(points)?).ok().map(Polygon::from))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::ring::{winding, Winding};

    fn points(coords: &[[f64; 2]]) -> Vec<Coordinate> {
        coords
            .iter()
            .map(|c| Coordinate::try_from_f64(c).unwrap())
            .collect()
    }

    #[test]
    fn hull_of_convex_polygon_is_the_polygon() {
        let square = points(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
        let hull = convex_hull(&square).unwrap();

        assert_eq!(hull.len(), 5);
        assert_eq!(hull.first(), hull.last());
        for p in &square {
            assert!(hull.contains(p));
        }
        assert_eq!(winding(&hull).unwrap(), Winding::CounterClockwise);
    }

    #[test]
    fn inner_points_are_skipped() {
        let input = points(&[
            [0.0, 0.0],
            [5.0, 5.0],
            [10.0, 0.0],
            [3.0, 1.0],
            [10.0, 10.0],
            [5.0, 0.0],
            [0.0, 10.0],
            [0.0, 0.0],
        ]);
        let hull = convex_hull(&input).unwrap();

        assert_eq!(
            hull,
            points(&[
                [0.0, 0.0],
                [10.0, 0.0],
                [10.0, 10.0],
                [0.0, 10.0],
                [0.0, 0.0]
            ])
        );
        assert!(hull_polygon(&input).unwrap().is_some());
    }

    #[test]
    fn collinear_points() {
        let hull = convex_hull(&points(&[[0.0, 0.0], [2.0, 2.0], [1.0, 1.0]])).unwrap();
        assert_eq!(hull, points(&[[0.0, 0.0], [2.0, 2.0], [0.0, 0.0]]));
        assert!(hull_polygon(&points(&[[0.0, 0.0], [2.0, 2.0], [1.0, 1.0]]))
            .unwrap()
            .is_none());
    }

    #[test]
    fn degenerate_inputs() {
        assert!(convex_hull(&Vec::<Coordinate>::new()).unwrap().is_empty());

        let hull = convex_hull(&points(&[[1.0, 1.0], [1.0, 1.0], [1.0, 1.0]])).unwrap();
        assert_eq!(hull, points(&[[1.0, 1.0], [1.0, 1.0]]));

        let hull = convex_hull(&points(&[[3.0, 1.0], [1.0, 1.0]])).unwrap();
        assert_eq!(hull, points(&[[1.0, 1.0], [3.0, 1.0], [1.0, 1.0]]));
    }

    #[test]
    fn hull_is_deterministic() {
        let a = points(&[[0.0, 0.0], [4.0, 1.0], [2.0, 5.0], [1.0, 1.0]]);
        let mut b = a.clone();
        b.reverse();
        assert_eq!(convex_hull(&a).unwrap(), convex_hull(&b).unwrap());
    }

    #[test]
    fn huge_coordinates_are_an_error() {
        let far = [
            Coordinate::new(Decimal::from_scientific("-7e28").unwrap(), Decimal::ZERO),
            Coordinate::new(Decimal::from_scientific("7e28").unwrap(), Decimal::ONE),
            Coordinate::new(Decimal::ZERO, Decimal::from_scientific("7e28").unwrap()),
        ];
        assert_matches!(convex_hull(&far), Err(GeoformError::InvalidArgument(_)));
        assert_matches!(hull_polygon(&far), Err(GeoformError::InvalidArgument(_)));
    }
}
