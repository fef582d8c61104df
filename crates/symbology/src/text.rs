use foundation::math::Vec2;
use scene::TextEncoding;
use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;

/// Persisted encoding setting; maps onto the substrate's `TextEncoding`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingSetting {
    Ascii,
    Utf8,
    Utf16,
}

impl EncodingSetting {
    pub fn to_encoding(self) -> TextEncoding {
        match self {
            EncodingSetting::Ascii => TextEncoding::Ascii,
            EncodingSetting::Utf8 => TextEncoding::Utf8,
            EncodingSetting::Utf16 => TextEncoding::Utf16,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSymbol {
    /// Label content used when no explicit text is given at construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<EncodingSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Screen-space nudge in pixels, `[x, y]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_offset: Option<[f64; 2]>,
}

impl TextSymbol {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Effective encoding; unset means `Undefined` (substrate decides).
    pub fn encoding_or_default(&self) -> TextEncoding {
        self.encoding
            .map(EncodingSetting::to_encoding)
            .unwrap_or(TextEncoding::Undefined)
    }

    /// Effective pixel offset; defaults to zero.
    pub fn pixel_offset_or_default(&self) -> Vec2 {
        self.pixel_offset
            .map(|[x, y]| Vec2::new(x, y))
            .unwrap_or(Vec2::ZERO)
    }
}
