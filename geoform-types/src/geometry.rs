use serde::{Deserialize, Serialize};

use crate::error::GeoformError;
use crate::geo::Projection;
use crate::geometry_type::GeometryType;
use crate::hull::convex_hull;
use crate::impls::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon};
use crate::Coordinate;

/// Any of the supported geometries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Geometry {
    /// Point.
    Point(Coordinate),
    /// Set of points.
    MultiPoint(MultiPoint),
    /// Line string.
    LineString(LineString),
    /// Set of line strings.
    MultiLineString(MultiLineString),
    /// Polygon.
    Polygon(Polygon),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// Kind of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
        }
    }

    /// Iterates over all coordinates of the geometry.
    pub fn coordinates(&self) -> Box<dyn Iterator<Item = &'_ Coordinate> + '_> {
        match self {
            Geometry::Point(v) => Box::new(std::iter::once(v)),
            Geometry::MultiPoint(v) => Box::new(v.points().iter()),
            Geometry::LineString(v) => Box::new(v.iter()),
            Geometry::MultiLineString(v) => Box::new(v.coordinates()),
            Geometry::Polygon(v) => Box::new(v.coordinates()),
            Geometry::MultiPolygon(v) => Box::new(v.coordinates()),
        }
    }

    /// Creates a geometry of the same structure with every coordinate converted by `f`.
    pub fn map_coordinates(
        &self,
        mut f: impl FnMut(&Coordinate) -> Result<Coordinate, GeoformError>,
    ) -> Result<Geometry, GeoformError> {
        Ok(match self {
            Geometry::Point(v) => Geometry::Point(f(v)?),
            Geometry::MultiPoint(v) => Geometry::MultiPoint(v.map_coordinates(&mut f)?),
            Geometry::LineString(v) => Geometry::LineString(v.map_coordinates(&mut f)?),
            Geometry::MultiLineString(v) => Geometry::MultiLineString(v.map_coordinates(&mut f)?),
            Geometry::Polygon(v) => Geometry::Polygon(v.map_coordinates(&mut f)?),
            Geometry::MultiPolygon(v) => Geometry::MultiPolygon(v.map_coordinates(&mut f)?),
        })
    }

    /// Projects every coordinate of the geometry with the given projection.
    pub fn project<Proj>(&self, projection: &Proj) -> Result<Geometry, GeoformError>
    where
        Proj: Projection<InPoint = Coordinate, OutPoint = Coordinate> + ?Sized,
    {
        self.map_coordinates(|c| projection.project(c))
    }

    /// Reprojects the geometry into geographic coordinates.
    pub fn to_geographic(&self) -> Result<Geometry, GeoformError> {
        self.map_coordinates(Coordinate::to_geographic)
    }

    /// Reprojects the geometry into Web Mercator.
    pub fn to_mercator(&self) -> Result<Geometry, GeoformError> {
        self.map_coordinates(Coordinate::to_mercator)
    }

    /// Closed ring of the convex hull of the geometry points. See [`convex_hull`].
    pub fn convex_hull(&self) -> Result<Vec<Coordinate>, GeoformError> {
        convex_hull(self.coordinates())
    }
}

impl From<Coordinate> for Geometry {
    fn from(value: Coordinate) -> Self {
        Self::Point(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}
