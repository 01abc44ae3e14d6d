use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Coordinate reference system a [`Coordinate`](crate::Coordinate) can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crs {
    /// Longitude and latitude in degrees on WGS84 (EPSG:4326).
    Geographic,
    /// Spherical Web Mercator in meters (EPSG:3857, ArcGIS 102100).
    Mercator,
}

impl Crs {
    /// EPSG code of the system.
    pub fn epsg(&self) -> u32 {
        match self {
            Crs::Geographic => 4326,
            Crs::Mercator => 3857,
        }
    }

    /// Well known id ArcGIS services use for the system.
    pub fn wkid(&self) -> u32 {
        match self {
            Crs::Geographic => 4326,
            Crs::Mercator => 102100,
        }
    }

    /// Linked `crs` member of a GeoJSON object.
    pub fn to_geojson(&self) -> Value {
        let href = match self {
            Crs::Geographic => "http://spatialreference.org/ref/epsg/4326/ogcwkt/",
            Crs::Mercator => "http://spatialreference.org/ref/sr-org/6928/ogcwkt/",
        };

        json!({
            "type": "link",
            "properties": {
                "href": href,
                "type": "ogcwkt",
            }
        })
    }
}
