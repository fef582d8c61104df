use serde::{Deserialize, Serialize};

use crate::instance::{IconSymbol, InstanceSymbol, MarkerSymbol};
use crate::text::TextSymbol;

/// Bag of typed symbols describing how a feature is drawn.
///
/// A style carries at most one symbol of each kind. After fallback
/// resolution at most one instance symbol is effective: the icon symbol
/// wins, and a legacy marker symbol is converted only when no icon symbol
/// is present.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconSymbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerSymbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSymbol>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon(mut self, icon: IconSymbol) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_marker(mut self, marker: MarkerSymbol) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn with_text(mut self, text: TextSymbol) -> Self {
        self.text = Some(text);
        self
    }

    /// The effective instance symbol, icon preferred over legacy marker.
    pub fn instance_symbol(&self) -> Option<InstanceSymbol> {
        if let Some(icon) = &self.icon {
            return Some(InstanceSymbol::Icon(icon.clone()));
        }
        self.marker
            .as_ref()
            .map(|marker| InstanceSymbol::Marker(marker.clone()))
    }

    /// The text symbol, created in place if absent.
    pub fn text_or_create(&mut self) -> &mut TextSymbol {
        self.text.get_or_insert_with(TextSymbol::default)
    }
}
