//! See [`GeometryType`].
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Kind of a [`Geometry`](crate::Geometry). Names match GeoJSON `type` values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// Point geometry.
    Point,
    /// Multipoint geometry.
    MultiPoint,
    /// Line string geometry.
    LineString,
    /// Multi line string geometry.
    MultiLineString,
    /// Polygon geometry.
    Polygon,
    /// Multipolygon geometry.
    MultiPolygon,
}

impl GeometryType {
    /// GeoJSON name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
