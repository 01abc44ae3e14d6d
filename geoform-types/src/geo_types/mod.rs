//! Conversion of geometries into `geo-types` geometries with `f64` coordinates.
//!
//! Only `x` and `y` are kept, `geo-types` has no place for `z` and `m`.

use geo_types::{coord, Coord};

use crate::decimal::to_f64;
use crate::geometry::Geometry;
use crate::impls::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon};
use crate::Coordinate;

impl From<&Coordinate> for Coord<f64> {
    fn from(value: &Coordinate) -> Self {
        coord! { x: to_f64(value.x()), y: to_f64(value.y()) }
    }
}

impl From<&Coordinate> for geo_types::Point<f64> {
    fn from(value: &Coordinate) -> Self {
        geo_types::Point(value.into())
    }
}

fn line(points: &[Coordinate]) -> geo_types::LineString<f64> {
    points.iter().map(Coord::<f64>::from).collect()
}

impl From<&LineString> for geo_types::LineString<f64> {
    fn from(value: &LineString) -> Self {
        line(value)
    }
}

impl From<&MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(value: &MultiPoint) -> Self {
        geo_types::MultiPoint(value.points().iter().map(geo_types::Point::from).collect())
    }
}

impl From<&MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(value: &MultiLineString) -> Self {
        geo_types::MultiLineString(value.parts().iter().map(geo_types::LineString::from).collect())
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        geo_types::Polygon::new(
            line(value.shell()),
            value.holes().iter().map(|h| line(h)).collect(),
        )
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        geo_types::MultiPolygon(value.parts().iter().map(geo_types::Polygon::from).collect())
    }
}

impl From<&Geometry> for geo_types::Geometry<f64> {
    fn from(value: &Geometry) -> Self {
        match value {
            Geometry::Point(v) => geo_types::Geometry::Point(v.into()),
            Geometry::MultiPoint(v) => geo_types::Geometry::MultiPoint(v.into()),
            Geometry::LineString(v) => geo_types::Geometry::LineString(v.into()),
            Geometry::MultiLineString(v) => geo_types::Geometry::MultiLineString(v.into()),
            Geometry::Polygon(v) => geo_types::Geometry::Polygon(v.into()),
            Geometry::MultiPolygon(v) => geo_types::Geometry::MultiPolygon(v.into()),
        }
    }
}
