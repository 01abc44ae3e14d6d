//! Conversions between [`Geometry`] and GeoJSON geometries of the `geojson` crate, and output of features and
//! feature collections as `geojson` objects.

use geojson::feature::Id;
use geojson::{JsonObject, LineStringType, PolygonType, Position, Value};

use crate::error::GeoformError;
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::Geometry;
use crate::impls::{LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Polygon};
use crate::Coordinate;

impl Geometry {
    /// GeoJSON geometry object `{ "type", "coordinates" }`.
    ///
    /// ```
    /// use geoform_types::{Coordinate, Geometry};
    ///
    /// let point = Geometry::Point(Coordinate::try_from_f64(&[1.5, 2.0]).unwrap());
    /// assert_eq!(
    ///     point.to_json(),
    ///     serde_json::json!({"type": "Point", "coordinates": [1.5, 2.0]})
    /// );
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(serde_json::Map::from(&geojson::Geometry::from(self)))
    }

    /// Reads a GeoJSON geometry object.
    pub fn from_geojson_value(value: &serde_json::Value) -> Result<Self, GeoformError> {
        let geometry: geojson::Geometry = serde_json::from_value(value.clone())
            .map_err(|err| GeoformError::invalid(format!("invalid GeoJSON geometry: {err}")))?;
        Self::try_from(&geometry)
    }
}

impl From<&Geometry> for geojson::Geometry {
    fn from(geometry: &Geometry) -> Self {
        let value = match geometry {
            Geometry::Point(p) => Value::Point(p.to_f64_vec()),
            Geometry::MultiPoint(mp) => Value::MultiPoint(positions(mp.points())),
            Geometry::LineString(line) => Value::LineString(positions(line)),
            Geometry::MultiLineString(mls) => {
                Value::MultiLineString(mls.parts().iter().map(|l| positions(l)).collect())
            }
            Geometry::Polygon(polygon) => Value::Polygon(polygon_rings(polygon)),
            Geometry::MultiPolygon(mp) => {
                Value::MultiPolygon(mp.parts().iter().map(polygon_rings).collect())
            }
        };

        geojson::Geometry::new(value)
    }
}

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = GeoformError;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self, Self::Error> {
        Ok(match &geometry.value {
            Value::Point(p) => Geometry::Point(convert_position(p)?),
            Value::MultiPoint(points) => Geometry::MultiPoint(MultiPoint::from(
                points
                    .iter()
                    .map(convert_position)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::LineString(line) => Geometry::LineString(convert_line(line)?),
            Value::MultiLineString(lines) => Geometry::MultiLineString(MultiLineString::from(
                lines
                    .iter()
                    .map(convert_line)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::Polygon(polygon) => Geometry::Polygon(convert_polygon(polygon)?),
            Value::MultiPolygon(mp) => Geometry::MultiPolygon(MultiPolygon::from(
                mp.iter()
                    .map(convert_polygon)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::GeometryCollection(_) => {
                return Err(GeoformError::invalid(
                    "geometry collections are not supported",
                ))
            }
        })
    }
}

impl From<&Feature> for geojson::Feature {
    fn from(feature: &Feature) -> Self {
        let id = feature.id.as_ref().map(|id| match id {
            serde_json::Value::String(s) => Id::String(s.clone()),
            serde_json::Value::Number(n) => Id::Number(n.clone()),
            other => Id::String(other.to_string()),
        });

        geojson::Feature {
            bbox: None,
            geometry: feature.geometry.as_ref().map(geojson::Geometry::from),
            id,
            properties: Some(feature.properties.clone()),
            foreign_members: None,
        }
    }
}

impl From<&FeatureCollection> for geojson::FeatureCollection {
    fn from(collection: &FeatureCollection) -> Self {
        let foreign_members = collection.crs.map(|crs| {
            let mut members = JsonObject::new();
            members.insert("crs".into(), crs.to_geojson());
            members
        });

        geojson::FeatureCollection {
            bbox: None,
            features: collection.features.iter().map(geojson::Feature::from).collect(),
            foreign_members,
        }
    }
}

fn positions(points: &[Coordinate]) -> Vec<Position> {
    points.iter().map(Coordinate::to_f64_vec).collect()
}

fn polygon_rings(polygon: &Polygon) -> PolygonType {
    polygon.rings().iter().map(|r| positions(r)).collect()
}

fn convert_position(position: &Position) -> Result<Coordinate, GeoformError> {
    Coordinate::try_from_f64(position)
}

fn convert_points(points: &[Position]) -> Result<Vec<Coordinate>, GeoformError> {
    points.iter().map(convert_position).collect()
}

fn convert_line(line: &LineStringType) -> Result<LineString, GeoformError> {
    LineString::new(convert_points(line)?)
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon, GeoformError> {
    Polygon::new(
        polygon
            .iter()
            .map(|ring| LinearRing::new(convert_points(ring)?))
            .collect::<Result<Vec<_>, _>>()?,
    )
}
