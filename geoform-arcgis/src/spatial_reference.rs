use geoform_types::geo::Crs;
use serde_json::{json, Value};

use crate::error::ArcGisError;

/// Well known ids ArcGIS uses for the spherical Web Mercator.
const WEB_MERCATOR_WKIDS: [i64; 4] = [102100, 102113, 3857, 900913];
const WGS84_WKID: i64 = 4326;

/// Spatial reference of an ArcGIS geometry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialReference {
    /// Longitude and latitude on WGS84.
    #[default]
    Wgs84,
    /// Web Mercator auxiliary sphere.
    WebMercator,
    /// Any other system, with its well known id if one was given.
    Other(Option<i64>),
}

impl SpatialReference {
    /// Reads a `spatialReference` member. `wkid` is used if present, `latestWkid` otherwise.
    ///
    /// A missing or `null` member means WGS84.
    pub fn from_json(value: Option<&Value>) -> Result<Self, ArcGisError> {
        let object = match value {
            None | Some(Value::Null) => return Ok(Self::Wgs84),
            Some(Value::Object(object)) => object,
            Some(other) => {
                return Err(ArcGisError::malformed(format!(
                    "spatialReference must be an object, but got {other}"
                )))
            }
        };

        let wkid = ["wkid", "latestWkid"]
            .into_iter()
            .filter_map(|key| object.get(key))
            .find(|v| !v.is_null());

        Ok(match wkid {
            None => Self::Other(None),
            Some(v) => Self::from_wkid(v.as_i64().ok_or_else(|| {
                ArcGisError::malformed(format!("wkid must be an integer, but got {v}"))
            })?),
        })
    }

    /// Spatial reference for the given well known id.
    pub fn from_wkid(wkid: i64) -> Self {
        if wkid == WGS84_WKID {
            Self::Wgs84
        } else if WEB_MERCATOR_WKIDS.contains(&wkid) {
            Self::WebMercator
        } else {
            Self::Other(Some(wkid))
        }
    }

    /// Well known id.
    pub fn wkid(&self) -> Option<i64> {
        match self {
            Self::Wgs84 => Some(WGS84_WKID),
            Self::WebMercator => Some(WEB_MERCATOR_WKIDS[0]),
            Self::Other(wkid) => *wkid,
        }
    }

    /// Coordinate system of the coordinates, if it is one of the supported ones.
    pub fn crs(&self) -> Option<Crs> {
        match self {
            Self::Wgs84 => Some(Crs::Geographic),
            Self::WebMercator => Some(Crs::Mercator),
            Self::Other(_) => None,
        }
    }

    /// `spatialReference` member value.
    pub fn to_json(&self) -> Value {
        match self.wkid() {
            Some(wkid) => json!({ "wkid": wkid }),
            None => json!({}),
        }
    }
}

impl From<Crs> for SpatialReference {
    fn from(value: Crs) -> Self {
        match value {
            Crs::Geographic => Self::Wgs84,
            Crs::Mercator => Self::WebMercator,
        }
    }
}
