use scene::ImageHandle;
use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;

/// Image-backed point-marker symbol.
///
/// All fields are optional; accessors document the effective defaults.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSymbol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Inline decoded image, e.g. procedurally generated. Never persisted;
    /// persisted icons travel as a `url`.
    #[serde(skip)]
    pub image: Option<ImageHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Degrees clockwise from north.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl IconSymbol {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Effective scale; defaults to 1.0.
    pub fn scale_or_default(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }

    /// Effective heading in radians; defaults to 0.0.
    pub fn heading_rad_or_default(&self) -> f64 {
        self.heading_deg.unwrap_or(0.0).to_radians()
    }
}

/// Deprecated marker symbol, kept for old style records. A superset of
/// `IconSymbol` from before icons and 3D models were split apart.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSymbol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip)]
    pub image: Option<ImageHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// True when the marker referenced a 3D model rather than an image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_model: Option<bool>,
}

impl MarkerSymbol {
    /// Convert to the modern icon symbol. Model markers have no icon
    /// equivalent and convert to an empty symbol (no url, no image).
    pub fn to_icon(&self) -> IconSymbol {
        if self.is_model.unwrap_or(false) {
            return IconSymbol::default();
        }
        IconSymbol {
            url: self.url.clone(),
            image: self.image.clone(),
            scale: self.scale,
            heading_deg: None,
            alignment: None,
        }
    }
}

/// The one instance symbol a style resolves to, tagged by origin.
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceSymbol {
    Icon(IconSymbol),
    Marker(MarkerSymbol),
}

impl InstanceSymbol {
    /// Resolve to an icon symbol, converting the legacy marker form once
    /// here instead of type-switching in the geometry builders.
    pub fn as_icon(&self) -> IconSymbol {
        match self {
            InstanceSymbol::Icon(icon) => icon.clone(),
            InstanceSymbol::Marker(marker) => marker.to_icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IconSymbol, MarkerSymbol};

    #[test]
    fn icon_defaults() {
        let icon = IconSymbol::default();
        assert_eq!(icon.scale_or_default(), 1.0);
        assert_eq!(icon.heading_rad_or_default(), 0.0);
        assert!(icon.alignment.is_none());
    }

    #[test]
    fn marker_converts_url_and_scale() {
        let marker = MarkerSymbol {
            url: Some("markers/pin.png".into()),
            scale: Some(2.0),
            ..MarkerSymbol::default()
        };
        let icon = marker.to_icon();
        assert_eq!(icon.url.as_deref(), Some("markers/pin.png"));
        assert_eq!(icon.scale_or_default(), 2.0);
    }

    #[test]
    fn model_marker_converts_to_empty_icon() {
        let marker = MarkerSymbol {
            url: Some("models/tree.ive".into()),
            is_model: Some(true),
            ..MarkerSymbol::default()
        };
        let icon = marker.to_icon();
        assert!(icon.url.is_none());
        assert!(icon.image.is_none());
    }
}
