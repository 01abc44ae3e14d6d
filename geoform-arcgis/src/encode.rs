use geoform_types::decimal::to_f64;
use geoform_types::geo::Crs;
use geoform_types::impls::{LinearRing, Polygon};
use geoform_types::ring::Winding;
use geoform_types::{Coordinate, Feature, FeatureCollection, Geometry, GeometryType};
use serde_json::{json, Map, Value};

use crate::error::ArcGisError;
use crate::options::ArcGisOptions;
use crate::spatial_reference::SpatialReference;

/// Writes a geometry as an ArcGIS JSON geometry in the given spatial reference.
///
/// Polygon shells are written clockwise and holes counterclockwise, all rings of all polygons in one `rings` list.
pub fn encode_geometry(
    geometry: &Geometry,
    spatial_reference: SpatialReference,
) -> Result<Value, ArcGisError> {
    let Some(crs) = spatial_reference.crs() else {
        return Err(ArcGisError::UnsupportedSpatialReference(format!(
            "cannot write coordinates in {spatial_reference:?}"
        )));
    };

    let geometry = match crs {
        Crs::Geographic => geometry.to_geographic()?,
        Crs::Mercator => geometry.to_mercator()?,
    };

    let mut object = match &geometry {
        Geometry::Point(p) => point(p),
        Geometry::MultiPoint(mp) => json!({ "points": positions(mp.points()) }),
        Geometry::LineString(line) => json!({ "paths": [positions(line)] }),
        Geometry::MultiLineString(mls) => json!({
            "paths": mls.parts().iter().map(|l| positions(l)).collect::<Vec<_>>()
        }),
        Geometry::Polygon(polygon) => json!({ "rings": rings(polygon)? }),
        Geometry::MultiPolygon(mp) => {
            let mut all = vec![];
            for polygon in mp.parts() {
                all.extend(rings(polygon)?);
            }
            json!({ "rings": all })
        }
    };

    if let Value::Object(object) = &mut object {
        if !matches!(geometry, Geometry::Point(_)) {
            if geometry.coordinates().any(|c| c.z().is_some()) {
                object.insert("hasZ".into(), true.into());
            }
            if geometry.coordinates().any(|c| c.m().is_some()) {
                object.insert("hasM".into(), true.into());
            }
        }
        object.insert("spatialReference".into(), spatial_reference.to_json());
    }

    Ok(object)
}

/// Writes a feature as `{ geometry, attributes }`. The id is written as the attribute configured by
/// [`ArcGisOptions::id_attribute`], `OBJECTID` by default.
pub fn encode_feature(
    feature: &Feature,
    spatial_reference: SpatialReference,
    options: &ArcGisOptions,
) -> Result<Value, ArcGisError> {
    let mut attributes = feature.properties.clone();
    if let Some(id) = &feature.id {
        attributes.insert(options.output_id_attribute().to_string(), id.clone());
    }

    let mut object = Map::new();
    if let Some(geometry) = &feature.geometry {
        object.insert(
            "geometry".into(),
            encode_geometry(geometry, spatial_reference)?,
        );
    }
    object.insert("attributes".into(), Value::Object(attributes));

    Ok(Value::Object(object))
}

/// Writes a feature collection as an ArcGIS feature set.
pub fn encode_feature_collection(
    collection: &FeatureCollection,
    spatial_reference: SpatialReference,
    options: &ArcGisOptions,
) -> Result<Value, ArcGisError> {
    let features = collection
        .features
        .iter()
        .map(|f| encode_feature(f, spatial_reference, options))
        .collect::<Result<Vec<_>, _>>()?;

    let mut object = Map::new();
    if let Some(geometry_type) = collection
        .features
        .iter()
        .find_map(|f| f.geometry.as_ref())
        .map(|g| esri_geometry_type(g.geometry_type()))
    {
        object.insert("geometryType".into(), geometry_type.into());
    }
    object.insert("spatialReference".into(), spatial_reference.to_json());
    object.insert("features".into(), Value::Array(features));

    Ok(Value::Object(object))
}

/// ArcGIS name of the geometry type.
pub fn esri_geometry_type(geometry_type: GeometryType) -> &'static str {
    match geometry_type {
        GeometryType::Point => "esriGeometryPoint",
        GeometryType::MultiPoint => "esriGeometryMultipoint",
        GeometryType::LineString | GeometryType::MultiLineString => "esriGeometryPolyline",
        GeometryType::Polygon | GeometryType::MultiPolygon => "esriGeometryPolygon",
    }
}

fn point(p: &Coordinate) -> Value {
    let mut object = Map::new();
    object.insert("x".into(), to_f64(p.x()).into());
    object.insert("y".into(), to_f64(p.y()).into());
    if let Some(z) = p.z() {
        object.insert("z".into(), to_f64(z).into());
    }
    if let Some(m) = p.m() {
        object.insert("m".into(), to_f64(m).into());
    }

    Value::Object(object)
}

fn positions(points: &[Coordinate]) -> Vec<Vec<f64>> {
    points.iter().map(Coordinate::to_f64_vec).collect()
}

fn oriented(ring: &LinearRing, winding: Winding) -> Result<Vec<Vec<f64>>, ArcGisError> {
    Ok(if ring.winding()? == winding {
        positions(ring)
    } else {
        positions(&ring.reversed())
    })
}

fn rings(polygon: &Polygon) -> Result<Vec<Vec<Vec<f64>>>, ArcGisError> {
    std::iter::once(oriented(polygon.shell(), Winding::Clockwise))
        .chain(
            polygon
                .holes()
                .iter()
                .map(|hole| oriented(hole, Winding::CounterClockwise)),
        )
        .collect()
}
