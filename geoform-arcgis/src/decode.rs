use geoform_types::geo::Crs;
use geoform_types::impls::{LineString, MultiLineString, MultiPoint};
use geoform_types::ring::assemble_rings;
use geoform_types::{Coordinate, Feature, FeatureCollection, Geometry, Ordinate};
use serde_json::{Map, Value};

use crate::compressed::decompress_geometry;
use crate::error::ArcGisError;
use crate::options::{ArcGisOptions, UnknownSpatialReference};
use crate::spatial_reference::SpatialReference;

/// Result of decoding an ArcGIS JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Geometry object. `None` for empty geometries and for objects without any geometry member.
    Geometry(Option<Geometry>),
    /// Feature object, `{ geometry, attributes }` or `{ compressedGeometry }`.
    Feature(Feature),
    /// Feature set object, `{ features: [...] }`.
    FeatureCollection(FeatureCollection),
}

impl Decoded {
    /// Decoded geometry of a geometry or a feature object.
    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            Decoded::Geometry(geometry) => geometry.as_ref(),
            Decoded::Feature(feature) => feature.geometry.as_ref(),
            Decoded::FeatureCollection(_) => None,
        }
    }
}

/// Decodes an ArcGIS JSON geometry, feature or feature set.
///
/// Coordinates in Web Mercator are converted into longitude and latitude. The input value is not changed.
///
/// ```
/// use geoform_arcgis::{decode, ArcGisOptions, Decoded};
/// use geoform_types::{Coordinate, Geometry};
/// use serde_json::json;
///
/// let point = json!({"x": -66.796875, "y": 20.0390625, "spatialReference": {"wkid": 4326}});
/// let decoded = decode(&point, &ArcGisOptions::default()).unwrap();
/// assert_eq!(
///     decoded,
///     Decoded::Geometry(Some(Geometry::Point(
///         Coordinate::try_from_f64(&[-66.796875, 20.0390625]).unwrap()
///     )))
/// );
/// ```
pub fn decode(value: &Value, options: &ArcGisOptions) -> Result<Decoded, ArcGisError> {
    Decoder { options }.decode(value)
}

struct Decoder<'a> {
    options: &'a ArcGisOptions,
}

const SHAPE_KEYS: [&str; 5] = ["x", "y", "points", "paths", "rings"];

impl Decoder<'_> {
    fn decode(&self, value: &Value) -> Result<Decoded, ArcGisError> {
        let object = as_object(value, "ArcGIS object")?;
        let spatial_reference = SpatialReference::from_json(object.get("spatialReference"))?;

        if let Some(features) = object.get("features") {
            return self
                .decode_feature_set(features, spatial_reference)
                .map(Decoded::FeatureCollection);
        }

        if ["geometry", "attributes", "compressedGeometry"]
            .iter()
            .any(|key| object.contains_key(*key))
        {
            return self
                .decode_feature(object, spatial_reference)
                .map(Decoded::Feature);
        }

        self.decode_geometry(object, spatial_reference)
            .map(Decoded::Geometry)
    }

    fn decode_feature_set(
        &self,
        features: &Value,
        spatial_reference: SpatialReference,
    ) -> Result<FeatureCollection, ArcGisError> {
        let features = as_array(features, "features")?
            .iter()
            .map(|feature| self.decode_feature(as_object(feature, "feature")?, spatial_reference))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Decoded ArcGIS feature set with {} features", features.len());

        Ok(FeatureCollection {
            features,
            crs: spatial_reference.crs().map(|_| Crs::Geographic),
        })
    }

    fn decode_feature(
        &self,
        object: &Map<String, Value>,
        spatial_reference: SpatialReference,
    ) -> Result<Feature, ArcGisError> {
        let geometry = if let Some(compressed) = object.get("compressedGeometry") {
            let compressed = compressed.as_str().ok_or_else(|| {
                ArcGisError::malformed("compressedGeometry must be a string")
            })?;
            Some(self.decode_compressed(compressed, spatial_reference)?)
        } else {
            match object.get("geometry") {
                None | Some(Value::Null) => None,
                Some(geometry) => {
                    let geometry = as_object(geometry, "geometry")?;
                    let spatial_reference = match geometry.get("spatialReference") {
                        Some(sr) => SpatialReference::from_json(Some(sr))?,
                        None => spatial_reference,
                    };
                    self.decode_geometry(geometry, spatial_reference)?
                }
            }
        };

        let mut properties = match object.get("attributes") {
            None | Some(Value::Null) => Map::new(),
            Some(attributes) => as_object(attributes, "attributes")?.clone(),
        };

        let id_key = self
            .options
            .id_attributes()
            .find(|key| properties.get(*key).is_some_and(|v| !v.is_null()))
            .map(str::to_string);
        let id = id_key.and_then(|key| properties.remove(&key));

        Ok(Feature {
            id,
            properties,
            geometry,
        })
    }

    fn decode_compressed(
        &self,
        compressed: &str,
        spatial_reference: SpatialReference,
    ) -> Result<Geometry, ArcGisError> {
        let crs = self.resolve(spatial_reference)?;
        let mut points = decompress_geometry(compressed)?
            .iter()
            .map(|xy| convert(Coordinate::try_from_f64(xy).map_err(malformed)?, crs))
            .collect::<Result<Vec<_>, _>>()?;

        match points.len() {
            0 => Err(ArcGisError::malformed(
                "compressed geometry does not contain any points",
            )),
            1 => Ok(Geometry::Point(points.remove(0))),
            _ => Ok(Geometry::LineString(LineString::new(points)?)),
        }
    }

    fn decode_geometry(
        &self,
        object: &Map<String, Value>,
        spatial_reference: SpatialReference,
    ) -> Result<Option<Geometry>, ArcGisError> {
        if !SHAPE_KEYS.iter().any(|key| object.contains_key(*key)) {
            return Ok(None);
        }

        let crs = self.resolve(spatial_reference)?;

        if object.contains_key("x") || object.contains_key("y") {
            return decode_point(object, crs);
        }

        if let Some(points) = object.get("points") {
            let points = positions(points, "points", crs)?;
            if points.is_empty() {
                return Ok(None);
            }

            return Ok(Some(Geometry::MultiPoint(MultiPoint::from(points))));
        }

        if let Some(paths) = object.get("paths") {
            let mut paths = as_array(paths, "paths")?
                .iter()
                .map(|path| LineString::new(positions(path, "path", crs)?).map_err(malformed))
                .collect::<Result<Vec<_>, _>>()?;

            return Ok(match paths.len() {
                0 => None,
                1 => paths.pop().map(Geometry::LineString),
                _ => Some(Geometry::MultiLineString(MultiLineString::from(paths))),
            });
        }

        if let Some(rings) = object.get("rings") {
            let rings = as_array(rings, "rings")?
                .iter()
                .map(|ring| positions(ring, "ring", crs))
                .collect::<Result<Vec<_>, _>>()?;

            return Ok(assemble_rings(rings)?);
        }

        Ok(None)
    }

    /// Coordinate system the coordinates of the given spatial reference are in. `None` if they should not be touched.
    fn resolve(&self, spatial_reference: SpatialReference) -> Result<Option<Crs>, ArcGisError> {
        if let Some(crs) = spatial_reference.crs() {
            return Ok(Some(crs));
        }

        let name = match spatial_reference.wkid() {
            Some(wkid) => format!("wkid {wkid}"),
            None => "spatial reference without wkid".to_string(),
        };
        match self.options.unknown_spatial_reference {
            UnknownSpatialReference::Reject => Err(ArcGisError::UnsupportedSpatialReference(name)),
            UnknownSpatialReference::PassThrough => {
                log::warn!("Unknown {name}, coordinates are left as is");
                Ok(None)
            }
        }
    }
}

fn decode_point(
    object: &Map<String, Value>,
    crs: Option<Crs>,
) -> Result<Option<Geometry>, ArcGisError> {
    // ArcGIS writes empty points with null or "NaN" ordinates
    let ordinate = |key: &str| -> Result<Option<Ordinate>, ArcGisError> {
        match object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.trim().eq_ignore_ascii_case("nan") => Ok(None),
            Some(v) => Ordinate::from_json(v).map(Some).map_err(malformed),
        }
    };

    let (Some(x), Some(y)) = (ordinate("x")?, ordinate("y")?) else {
        return Ok(None);
    };

    let mut coordinate = Coordinate::from_ordinates([x, y]).map_err(malformed)?;
    if let Some(z) = ordinate("z")? {
        coordinate = coordinate.with_z(z.to_decimal().map_err(malformed)?)?;
        if let Some(m) = ordinate("m")? {
            coordinate = coordinate.with_m(m.to_decimal().map_err(malformed)?)?;
        }
    } else if ordinate("m")?.is_some() {
        log::debug!("Measure of a point without elevation is dropped");
    }

    Ok(Some(Geometry::Point(convert(coordinate, crs)?)))
}

fn positions(value: &Value, what: &str, crs: Option<Crs>) -> Result<Vec<Coordinate>, ArcGisError> {
    as_array(value, what)?
        .iter()
        .map(|position| convert(Coordinate::try_from_json(position).map_err(malformed)?, crs))
        .collect()
}

/// Converts a coordinate given in `crs` into geographic coordinates.
fn convert(coordinate: Coordinate, crs: Option<Crs>) -> Result<Coordinate, ArcGisError> {
    match crs {
        Some(crs) => Ok(coordinate.in_crs(crs).to_geographic()?),
        None => Ok(coordinate),
    }
}

fn malformed(err: impl ToString) -> ArcGisError {
    ArcGisError::MalformedGeometry(err.to_string())
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, ArcGisError> {
    value
        .as_object()
        .ok_or_else(|| ArcGisError::malformed(format!("{what} must be an object, but got {value}")))
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>, ArcGisError> {
    value
        .as_array()
        .ok_or_else(|| ArcGisError::malformed(format!("{what} must be an array, but got {value}")))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geoform_types::decimal::to_f64;
    use geoform_types::impls::{LinearRing, MultiPolygon, Polygon};
    use geoform_types::ring::Winding;
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;

    fn c(xy: [f64; 2]) -> Coordinate {
        Coordinate::try_from_f64(&xy).unwrap()
    }

    fn coords(points: &[[f64; 2]]) -> Vec<Coordinate> {
        points.iter().copied().map(c).collect()
    }

    fn ring(points: &[[f64; 2]]) -> LinearRing {
        LinearRing::new(coords(points)).unwrap()
    }

    fn geometry(value: Value) -> Option<Geometry> {
        match decode(&value, &ArcGisOptions::default()).unwrap() {
            Decoded::Geometry(geometry) => geometry,
            other => panic!("expected geometry, got {other:?}"),
        }
    }

    fn feature(value: Value, options: &ArcGisOptions) -> Feature {
        match decode(&value, options).unwrap() {
            Decoded::Feature(feature) => feature,
            other => panic!("expected feature, got {other:?}"),
        }
    }

    const TRIANGLE: [[f64; 2]; 4] = [
        [41.8359375, 71.015625],
        [56.953125, 33.75],
        [21.796875, 36.5625],
        [41.8359375, 71.015625],
    ];

    fn triangle_feature(attributes: Value) -> Value {
        json!({
            "geometry": {
                "rings": [TRIANGLE],
                "spatialReference": {"wkid": 4326}
            },
            "attributes": attributes
        })
    }

    fn triangle() -> Geometry {
        Geometry::Polygon(Polygon::from(ring(&TRIANGLE)))
    }

    #[test]
    fn points() {
        assert_eq!(
            geometry(json!({"x": -66.796875, "y": 20.0390625, "spatialReference": {"wkid": 4326}})),
            Some(Geometry::Point(c([-66.796875, 20.0390625])))
        );

        assert_eq!(
            geometry(json!({"x": -66.796875, "y": 20.0390625, "z": 100, "spatialReference": {"wkid": 4326}})),
            Some(Geometry::Point(
                Coordinate::try_from_f64(&[-66.796875, 20.0390625, 100.0]).unwrap()
            ))
        );

        assert_eq!(
            geometry(json!({"x": 0, "y": 0, "spatialReference": {"wkid": 4326}})),
            Some(Geometry::Point(c([0.0, 0.0])))
        );

        let Some(Geometry::Point(p)) =
            geometry(json!({"x": 1, "y": 2, "z": 3, "m": 4}))
        else {
            panic!("expected point");
        };
        assert_eq!(p.m(), Some(Decimal::from(4)));

        let Some(Geometry::Point(p)) = geometry(json!({"x": 1, "y": 2, "m": 4})) else {
            panic!("expected point");
        };
        assert_eq!(p.dimensions(), 2);
    }

    #[test]
    fn empty_point() {
        assert_eq!(geometry(json!({"x": null, "y": 20.0})), None);
        assert_eq!(geometry(json!({"x": "NaN", "y": null})), None);
        assert_eq!(geometry(json!({"x": "NaN", "y": "NaN"})), None);
        assert_eq!(geometry(json!({"x": 1.5, "y": "NaN", "spatialReference": {"wkid": 102100}})), None);
    }

    #[test]
    fn mercator_point() {
        let Some(Geometry::Point(p)) = geometry(json!({
            "x": -13580977.876779145,
            "y": 5621521.486191948,
            "spatialReference": {"wkid": 102100}
        })) else {
            panic!("expected point");
        };

        assert!(p.is_geographic());
        assert_abs_diff_eq!(to_f64(p.x()), -121.999999999998, epsilon = 1e-9);
        assert_abs_diff_eq!(to_f64(p.y()), 44.99999999999942, epsilon = 1e-9);
    }

    #[test]
    fn polyline_with_one_path() {
        let line = [[6.6796875, 47.8125], [-65.390625, 52.3828125], [-52.3828125, 42.5390625]];
        assert_eq!(
            geometry(json!({"paths": [line], "spatialReference": {"wkid": 4326}})),
            Some(Geometry::LineString(LineString::new(coords(&line)).unwrap()))
        );
    }

    #[test]
    fn polyline_with_several_paths() {
        let a = [[41.8359375, 71.015625], [56.953125, 33.75]];
        let b = [[21.796875, 36.5625], [41.8359375, 71.015625]];
        assert_eq!(
            geometry(json!({"paths": [a, b], "spatialReference": {"wkid": 4326}})),
            Some(Geometry::MultiLineString(MultiLineString::from(vec![
                LineString::new(coords(&a)).unwrap(),
                LineString::new(coords(&b)).unwrap(),
            ])))
        );
    }

    #[test]
    fn multipoint() {
        let points = [[41.8359375, 71.015625], [56.953125, 33.75], [21.796875, 36.5625]];
        assert_eq!(
            geometry(json!({"points": points, "spatialReference": {"wkid": 4326}})),
            Some(Geometry::MultiPoint(MultiPoint::from(coords(&points))))
        );
        assert_eq!(geometry(json!({"points": []})), None);
    }

    #[test]
    fn polygon() {
        assert_eq!(
            geometry(json!({"rings": [TRIANGLE], "spatialReference": {"wkid": 4326}})),
            Some(triangle())
        );

        // open ring is closed
        assert_eq!(
            geometry(json!({"rings": [&TRIANGLE[..3]], "spatialReference": {"wkid": 4326}})),
            Some(triangle())
        );
    }

    fn portland() -> Vec<[f64; 2]> {
        vec![
            [-122.63, 45.52],
            [-122.57, 45.53],
            [-122.52, 45.50],
            [-122.49, 45.48],
            [-122.64, 45.49],
            [-122.63, 45.52],
            [-122.63, 45.52],
        ]
    }

    #[test]
    fn invalid_rings_are_stripped() {
        let result = geometry(json!({
            "rings": [portland(), [[-83, 35], [-74, 35], [-83, 35]]],
            "spatialReference": {"wkid": 4326}
        }));

        assert_eq!(
            result,
            Some(Geometry::Polygon(Polygon::from(ring(&portland()))))
        );
    }

    #[test]
    fn counterclockwise_ring_is_a_hole_of_previous_shell() {
        let result = geometry(json!({
            "rings": [portland(), [[-83, 35], [-74, 35], [-74, 41], [-83, 41], [-83, 35]]],
            "spatialReference": {"wkid": 4326}
        }));

        let Some(Geometry::Polygon(polygon)) = result else {
            panic!("expected polygon, got {result:?}");
        };
        assert_eq!(polygon.shell(), &ring(&portland()));
        assert_eq!(polygon.holes().len(), 1);
    }

    #[test]
    fn separate_shells_make_multipolygon() {
        let mut open_portland = portland();
        open_portland.truncate(5);
        let result = geometry(json!({
            "rings": [open_portland, [[-83, 35], [-83, 41], [-74, 41], [-74, 35]]],
            "spatialReference": {"wkid": 4326}
        }));

        let mut closed_portland = portland();
        closed_portland.truncate(6);
        assert_eq!(
            result,
            Some(Geometry::MultiPolygon(MultiPolygon::from(vec![
                Polygon::from(ring(&closed_portland)),
                Polygon::from(ring(&[[-83.0, 35.0], [-83.0, 41.0], [-74.0, 41.0], [-74.0, 35.0], [-83.0, 35.0]])),
            ])))
        );
    }

    #[test]
    fn multipolygon_with_holes() {
        let outer = [
            [-100.74462180954974, 39.95017165502381],
            [-94.50439384003792, 39.91647453608879],
            [-94.41650267263967, 34.89313438177965],
            [-100.78856739324887, 34.85708140996771],
            [-100.74462180954974, 39.95017165502381],
        ];
        let hole1 = [
            [-99.68993678392353, 39.341088433448896],
            [-99.68993678392353, 38.24507658785885],
            [-98.67919734199646, 37.86444431771113],
            [-98.06395917020868, 38.210554846669694],
            [-98.06395917020868, 39.341088433448896],
            [-99.68993678392353, 39.341088433448896],
        ];
        let hole2 = [
            [-96.83349180978595, 37.23732027507514],
            [-97.31689323047635, 35.967330282988534],
            [-96.5698183075912, 35.57512048069255],
            [-95.42724211456674, 36.357601429255965],
            [-96.83349180978595, 37.23732027507514],
        ];
        let second = [
            [-101.4916967324349, 38.24507658785885],
            [-101.44775114873578, 36.073960493943744],
            [-103.95263145328033, 36.03843312329154],
            [-103.68895795108557, 38.03770050767439],
            [-101.4916967324349, 38.24507658785885],
        ];

        let result = geometry(json!({
            "type": "polygon",
            "rings": [outer, hole1, hole2, second],
            "spatialReference": {"wkid": 4326}
        }));

        assert_eq!(
            result,
            Some(Geometry::MultiPolygon(MultiPolygon::from(vec![
                Polygon::from_parts(ring(&outer), vec![ring(&hole1), ring(&hole2)]),
                Polygon::from(ring(&second)),
            ])))
        );
        let Some(Geometry::MultiPolygon(mp)) = result else {
            unreachable!()
        };
        assert_eq!(mp.parts()[1].shell().winding().unwrap(), Winding::Clockwise);
    }

    #[test]
    fn features() {
        let f = feature(triangle_feature(json!({"foo": "bar"})), &ArcGisOptions::default());
        assert_eq!(f.geometry, Some(triangle()));
        assert_eq!(f.id, None);
        assert_eq!(f.properties.get("foo"), Some(&json!("bar")));

        let f = feature(triangle_feature(json!({})), &ArcGisOptions::default());
        assert_eq!(f.id, None);
        assert!(f.properties.is_empty());

        let no_attributes = json!({"geometry": {"rings": [TRIANGLE], "spatialReference": {"wkid": 4326}}});
        let f = feature(no_attributes, &ArcGisOptions::default());
        assert_eq!(f.geometry, Some(triangle()));
        assert!(f.properties.is_empty());
    }

    #[test]
    fn feature_ids() {
        let default = ArcGisOptions::default();

        let f = feature(triangle_feature(json!({"OBJECTID": 123})), &default);
        assert_eq!(f.id, Some(json!(123)));
        assert!(f.properties.is_empty());

        let f = feature(triangle_feature(json!({"FID": 123, "name": "x"})), &default);
        assert_eq!(f.id, Some(json!(123)));
        assert_eq!(f.properties.len(), 1);

        let f = feature(triangle_feature(json!({"FID": 1, "OBJECTID": 2})), &default);
        assert_eq!(f.id, Some(json!(2)));
        assert_eq!(f.properties.get("FID"), Some(&json!(1)));

        let custom = ArcGisOptions::with_id_attribute("FooId");
        let f = feature(triangle_feature(json!({"FooId": 123, "OBJECTID": 1})), &custom);
        assert_eq!(f.id, Some(json!(123)));
        assert_eq!(f.properties.get("OBJECTID"), Some(&json!(1)));

        let f = feature(triangle_feature(json!({"OBJECTID": 7})), &custom);
        assert_eq!(f.id, Some(json!(7)));

        let f = feature(triangle_feature(json!({"OBJECTID": null})), &default);
        assert_eq!(f.id, None);
    }

    #[test]
    fn feature_without_geometry() {
        let f = feature(json!({"attributes": {"foo": "bar"}}), &ArcGisOptions::default());
        assert_eq!(f.geometry, None);
        assert_eq!(f.id, None);
        assert_eq!(f.properties.get("foo"), Some(&json!("bar")));
    }

    #[test]
    fn compressed_geometry_feature() {
        let f = feature(
            json!({"compressedGeometry": "+1m91-66os4+1poms+1+91+3+3j"}),
            &ArcGisOptions::default(),
        );
        assert_eq!(
            f.geometry,
            Some(Geometry::LineString(
                LineString::new(coords(&[
                    [-117.1816137447153, 34.057461545380946],
                    [-117.18159575425025, 34.06266078978142],
                    [-117.18154178285509, 34.06472969326257],
                ]))
                .unwrap()
            ))
        );

        let f = feature(json!({"compressedGeometry": "+1m91-6fl6e+202gc"}), &ArcGisOptions::default());
        assert_matches!(f.geometry, Some(Geometry::Point(_)));

        assert_matches!(
            decode(&json!({"compressedGeometry": "+1m91"}), &ArcGisOptions::default()),
            Err(ArcGisError::MalformedGeometry(_))
        );
        assert_matches!(
            decode(&json!({"compressedGeometry": "1m91"}), &ArcGisOptions::default()),
            Err(ArcGisError::MalformedGeometry(_))
        );
    }

    #[test]
    fn feature_set() {
        let set = json!({
            "spatialReference": {"wkid": 102100},
            "features": [
                {"geometry": {"x": -13580977.876779145, "y": 5621521.486191948}, "attributes": {"OBJECTID": 1}},
                {"geometry": {"x": 1, "y": 2, "spatialReference": {"wkid": 4326}}, "attributes": {"OBJECTID": 2}},
                {"attributes": {"OBJECTID": 3}}
            ]
        });

        let Decoded::FeatureCollection(collection) = decode(&set, &ArcGisOptions::default()).unwrap() else {
            panic!("expected feature collection");
        };
        assert_eq!(collection.features.len(), 3);
        assert_eq!(collection.crs, Some(Crs::Geographic));

        let Some(Geometry::Point(p)) = &collection.features[0].geometry else {
            panic!("expected point");
        };
        assert_abs_diff_eq!(to_f64(p.x()), -122.0, epsilon = 1e-9);

        assert_eq!(
            collection.features[1].geometry,
            Some(Geometry::Point(c([1.0, 2.0])))
        );
        assert_eq!(collection.features[2].geometry, None);
        assert_eq!(collection.features[2].id, Some(json!(3)));
    }

    #[test]
    fn unknown_spatial_reference() {
        let point = json!({"x": 1000, "y": 2000, "spatialReference": {"wkid": 2263}});
        assert_matches!(
            decode(&point, &ArcGisOptions::default()),
            Err(ArcGisError::UnsupportedSpatialReference(_))
        );

        let options = ArcGisOptions {
            unknown_spatial_reference: UnknownSpatialReference::PassThrough,
            ..Default::default()
        };
        let decoded = decode(&point, &options).unwrap();
        let Some(Geometry::Point(p)) = decoded.geometry() else {
            panic!("expected point");
        };
        assert_eq!(p, &c([1000.0, 2000.0]));
        assert_eq!(p.crs(), None);
    }

    #[test]
    fn no_geometry_members() {
        assert_eq!(geometry(json!({"spatialReference": {"wkid": 2263}})), None);
        assert_eq!(geometry(json!({})), None);
    }

    #[test]
    fn malformed_input() {
        let options = ArcGisOptions::default();
        for value in [
            json!([1, 2]),
            json!({"x": "abc", "y": 1}),
            json!({"points": [[1]]}),
            json!({"points": [[1, 2, 3, 4, 5]]}),
            json!({"paths": [[[1, "a"], [2, 3]]]}),
            json!({"paths": {"a": 1}}),
            json!({"rings": [[[1, 2], [3]]]}),
            json!({"features": [1]}),
            json!({"geometry": 1}),
            json!({"attributes": [1]}),
        ] {
            assert_matches!(
                decode(&value, &options),
                Err(ArcGisError::MalformedGeometry(_)),
                "{value}"
            );
        }
    }

    #[test]
    fn short_paths_are_malformed() {
        let options = ArcGisOptions::default();
        for value in [
            json!({"paths": [[[1, 2]]]}),
            json!({"paths": [[]]}),
            json!({"paths": [[[1, 2], [3, 4]], [[5, 6]]]}),
        ] {
            assert_matches!(
                decode(&value, &options),
                Err(ArcGisError::MalformedGeometry(_)),
                "{value}"
            );
        }
    }

    #[test]
    fn input_is_not_modified() {
        let input = json!({
            "geometry": {
                "rings": [[[41.8359375, 71.015625], [56.953125, 33.75], [21.796875, 36.5625]]],
                "spatialReference": {"wkid": 102100}
            },
            "attributes": {"foo": "bar", "OBJECTID": 5}
        });
        let before = input.clone();

        decode(&input, &ArcGisOptions::default()).unwrap();
        assert_eq!(input, before);
    }
}
