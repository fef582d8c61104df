use foundation::bounds::Aabb2;
use foundation::math::Vec2;
use scene::{Drawable, DrawableKind};
use symbology::{Alignment, TextSymbol};

/// Build the label-text drawable positioned against the icon's extent.
///
/// Returns `None` for empty text. The anchor position is taken from the
/// icon box edge matching the alignment, so e.g. left-center text starts
/// at the icon's right edge and reads outward without overlapping it.
/// With no icon the box is the zero sentinel and the text anchors at the
/// origin.
pub fn build_text(
    text: &str,
    symbol: Option<&TextSymbol>,
    icon_box: Aabb2,
    icon_present: bool,
) -> Option<Drawable> {
    if text.is_empty() {
        return None;
    }

    let alignment = symbol.and_then(|s| s.alignment).unwrap_or(if icon_present {
        Alignment::LeftCenter
    } else {
        Alignment::CenterCenter
    });

    let x = match alignment {
        Alignment::LeftTop | Alignment::LeftCenter | Alignment::LeftBottom => icon_box.max.x,
        Alignment::CenterTop | Alignment::CenterCenter | Alignment::CenterBottom => {
            icon_box.center().x
        }
        Alignment::RightTop | Alignment::RightCenter | Alignment::RightBottom => icon_box.min.x,
    };
    let y = match alignment {
        Alignment::LeftTop | Alignment::CenterTop | Alignment::RightTop => icon_box.max.y,
        Alignment::LeftCenter | Alignment::CenterCenter | Alignment::RightCenter => {
            icon_box.center().y
        }
        Alignment::LeftBottom | Alignment::CenterBottom | Alignment::RightBottom => icon_box.min.y,
    };

    let encoding = symbol
        .map(TextSymbol::encoding_or_default)
        .unwrap_or_default();

    let mut drawable = Drawable::text(text, encoding, Vec2::new(x, y));
    if let DrawableKind::Text { anchor, .. } = &mut drawable.kind {
        *anchor = alignment.to_text_anchor();
    }
    Some(drawable)
}
