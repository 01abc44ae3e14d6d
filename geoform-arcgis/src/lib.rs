//! Reader and writer of ArcGIS JSON geometries, features and feature sets.
//!
//! Geometries are converted into [`geoform_types::Geometry`]: `x`/`y` into points, `points` into multipoints, `paths`
//! into line strings and `rings` into polygons or multipolygons. Web Mercator input is converted into longitude and
//! latitude. Compressed geometry strings are supported as well, see [`compressed`].

mod decode;
mod encode;
mod options;
mod spatial_reference;

pub mod compressed;
pub mod error;

pub use decode::{decode, Decoded};
pub use encode::{encode_feature, encode_feature_collection, encode_geometry, esri_geometry_type};
pub use options::{ArcGisOptions, UnknownSpatialReference};
pub use spatial_reference::SpatialReference;
