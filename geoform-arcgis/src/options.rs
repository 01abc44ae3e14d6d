use serde::{Deserialize, Serialize};

/// Attribute names checked for a feature id, after the configured one.
pub(crate) const DEFAULT_ID_ATTRIBUTES: [&str; 2] = ["OBJECTID", "FID"];

/// What to do with a spatial reference the codec does not recognize.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSpatialReference {
    /// Return [`ArcGisError::UnsupportedSpatialReference`](crate::error::ArcGisError::UnsupportedSpatialReference).
    #[default]
    Reject,
    /// Keep the coordinates as they are.
    PassThrough,
}

/// Options of the ArcGIS codec.
///
/// ```
/// use geoform_arcgis::{ArcGisOptions, UnknownSpatialReference};
///
/// let options: ArcGisOptions = serde_json::from_str(
///     r#"{"id_attribute": "FooId", "unknown_spatial_reference": "pass_through"}"#,
/// )
/// .unwrap();
/// assert_eq!(options.id_attribute.as_deref(), Some("FooId"));
/// assert_eq!(options.unknown_spatial_reference, UnknownSpatialReference::PassThrough);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcGisOptions {
    /// Attribute that holds the feature id. If not set or not present in a feature, `OBJECTID` and then `FID` are used.
    pub id_attribute: Option<String>,
    /// Handling of unknown spatial references.
    pub unknown_spatial_reference: UnknownSpatialReference,
}

impl ArcGisOptions {
    /// Options with the given id attribute.
    pub fn with_id_attribute(id_attribute: impl Into<String>) -> Self {
        Self {
            id_attribute: Some(id_attribute.into()),
            ..Default::default()
        }
    }

    /// Attribute names to look for the feature id in, by priority.
    pub(crate) fn id_attributes(&self) -> impl Iterator<Item = &str> {
        self.id_attribute
            .as_deref()
            .into_iter()
            .chain(DEFAULT_ID_ATTRIBUTES)
    }

    /// Attribute name the feature id is written to.
    pub(crate) fn output_id_attribute(&self) -> &str {
        self.id_attribute
            .as_deref()
            .unwrap_or(DEFAULT_ID_ATTRIBUTES[0])
    }
}
