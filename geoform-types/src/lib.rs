//! Geometry types with exact decimal coordinates.
//!
//! The crate provides a [`Coordinate`] with decimal ordinates, a [`Geometry`] model (points, line strings, polygons and
//! their multi versions), conversion between geographic coordinates and spherical Web Mercator, ring utilities,
//! convex hulls and circular buffers. Geometries can be written as GeoJSON and converted into `geo-types` geometries.

pub mod buffer;
pub mod decimal;
pub mod error;
pub mod feature;
pub mod geo;
pub mod geojson;
pub mod geometry_type;
pub mod hull;
pub mod impls;
pub mod ring;

mod coordinate;
pub use coordinate::{Coordinate, Ordinate};

mod geometry;
pub use geometry::Geometry;

pub use feature::{Feature, FeatureCollection};
pub use geometry_type::GeometryType;

#[cfg(feature = "geo-types")]
mod geo_types;
