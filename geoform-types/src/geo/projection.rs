use crate::error::GeoformError;

/// Projection converts points from one coordinate system into another.
pub trait Projection {
    /// Type of the input points.
    type InPoint;
    /// Type of the output points.
    type OutPoint;

    /// Projects a point.
    fn project(&self, input: &Self::InPoint) -> Result<Self::OutPoint, GeoformError>;
    /// Does inverse projection of a point.
    fn unproject(&self, input: &Self::OutPoint) -> Result<Self::InPoint, GeoformError>;
}
