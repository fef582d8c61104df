use scene::TextAnchor;
use serde::{Deserialize, Serialize};

/// 9-way anchor alignment on a 3x3 grid.
///
/// Names which point of the geometry coincides with the anchor position.
/// Unset alignments default to `CenterBottom` (icon sits above the point).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    LeftTop,
    LeftCenter,
    LeftBottom,
    CenterTop,
    CenterCenter,
    #[default]
    CenterBottom,
    RightTop,
    RightCenter,
    RightBottom,
}

impl Alignment {
    /// The text substrate's anchor mode for this alignment.
    pub fn to_text_anchor(self) -> TextAnchor {
        match self {
            Alignment::LeftTop => TextAnchor::LeftTop,
            Alignment::LeftCenter => TextAnchor::LeftCenter,
            Alignment::LeftBottom => TextAnchor::LeftBottom,
            Alignment::CenterTop => TextAnchor::CenterTop,
            Alignment::CenterCenter => TextAnchor::CenterCenter,
            Alignment::CenterBottom => TextAnchor::CenterBottom,
            Alignment::RightTop => TextAnchor::RightTop,
            Alignment::RightCenter => TextAnchor::RightCenter,
            Alignment::RightBottom => TextAnchor::RightBottom,
        }
    }
}
