//! Error type of the ArcGIS codec.

use geoform_types::error::GeoformError;
use thiserror::Error;

/// Error returned when reading or writing ArcGIS JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArcGisError {
    /// Geometry member has a wrong structure, or a compressed geometry string cannot be parsed.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// Spatial reference with a well known id the codec does not know how to handle.
    #[error("unsupported spatial reference: {0}")]
    UnsupportedSpatialReference(String),

    /// Geometry cannot be constructed or reprojected.
    #[error(transparent)]
    Geometry(#[from] GeoformError),
}

impl ArcGisError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedGeometry(msg.into())
    }
}
