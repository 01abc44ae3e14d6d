//! Features and feature collections.

use geojson::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GeoformError;
use crate::geo::Crs;
use crate::geometry::Geometry;
use crate::hull::convex_hull;
use crate::Coordinate;

/// A geometry with an optional id and a set of properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feature {
    /// Feature id, a JSON string or number.
    pub id: Option<Value>,
    /// Feature attributes.
    pub properties: Map<String, Value>,
    /// Feature geometry. A feature may have no geometry at all.
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// Creates a new feature with no id.
    pub fn new(geometry: Option<Geometry>, properties: Map<String, Value>) -> Self {
        Self {
            id: None,
            properties,
            geometry,
        }
    }

    /// Sets the id of the feature.
    pub fn with_id(self, id: impl Into<Value>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    /// GeoJSON feature object. `geometry` and `id` members are omitted if not set.
    pub fn to_json(&self) -> Value {
        let mut object = JsonObject::from(&geojson::Feature::from(self));
        drop_null_geometry(&mut object);

        Value::Object(object)
    }

    /// Closed ring of the convex hull of the feature geometry. Empty if the feature has no geometry.
    pub fn convex_hull(&self) -> Result<Vec<Coordinate>, GeoformError> {
        match &self.geometry {
            Some(geometry) => geometry.convex_hull(),
            None => Ok(vec![]),
        }
    }
}

impl From<Geometry> for Feature {
    fn from(value: Geometry) -> Self {
        Self::new(Some(value), Map::new())
    }
}

/// Ordered list of features.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Features of the collection.
    pub features: Vec<Feature>,
    /// Reference system written as the `crs` member of the GeoJSON output.
    pub crs: Option<Crs>,
}

impl FeatureCollection {
    /// Creates a collection without a `crs` member.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            crs: None,
        }
    }

    /// Adds a feature to the end of the collection.
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// GeoJSON feature collection object, with a `crs` member if the collection has one.
    pub fn to_json(&self) -> Value {
        let mut object = JsonObject::from(&geojson::FeatureCollection::from(self));
        if let Some(Value::Array(features)) = object.get_mut("features") {
            for feature in features.iter_mut().filter_map(Value::as_object_mut) {
                drop_null_geometry(feature);
            }
        }

        Value::Object(object)
    }

    /// Closed ring of the convex hull of all geometries in the collection.
    pub fn convex_hull(&self) -> Result<Vec<Coordinate>, GeoformError> {
        convex_hull(
            self.features
                .iter()
                .filter_map(|f| f.geometry.as_ref())
                .flat_map(Geometry::coordinates),
        )
    }
}

// `geojson` writes an absent geometry as `null`
fn drop_null_geometry(feature: &mut JsonObject) {
    if feature.get("geometry").is_some_and(Value::is_null) {
        feature.remove("geometry");
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(value: Vec<Feature>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::impls::MultiPoint;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::try_from_f64(&[x, y]).unwrap()
    }

    #[test]
    fn feature_json_omits_absent_members() {
        let feature = Feature::default();
        assert_eq!(
            feature.to_json(),
            json!({"type": "Feature", "properties": {}})
        );

        let mut properties = Map::new();
        properties.insert("name".into(), "a".into());
        let feature =
            Feature::new(Some(Geometry::Point(c(1.0, 2.0))), properties).with_id(12);
        assert_eq!(
            feature.to_json(),
            json!({
                "type": "Feature",
                "id": 12,
                "properties": {"name": "a"},
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
            })
        );
    }

    #[test]
    fn collection_json() {
        let mut collection = FeatureCollection::default();
        collection.push(Feature::from(Geometry::Point(c(1.0, 2.0))));
        let json = collection.to_json();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"].as_array().map(Vec::len), Some(1));
        assert!(json.get("crs").is_none());

        collection.push(Feature::default());
        assert_eq!(
            collection.to_json()["features"][1],
            json!({"type": "Feature", "properties": {}})
        );

        collection.crs = Some(Crs::Geographic);
        assert_eq!(
            collection.to_json()["crs"]["properties"]["href"],
            "http://spatialreference.org/ref/epsg/4326/ogcwkt/"
        );
    }

    #[test]
    fn hull_over_features() {
        let collection: FeatureCollection = [
            Feature::from(Geometry::Point(c(0.0, 0.0))),
            Feature::default(),
            Feature::from(Geometry::MultiPoint(MultiPoint::from(vec![
                c(4.0, 0.0),
                c(2.0, 1.0),
                c(0.0, 4.0),
            ]))),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            collection.convex_hull().unwrap(),
            vec![c(0.0, 0.0), c(4.0, 0.0), c(0.0, 4.0), c(0.0, 0.0)]
        );
        assert!(Feature::default().convex_hull().unwrap().is_empty());
    }
}
