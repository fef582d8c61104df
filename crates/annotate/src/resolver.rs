use scene::ImageHandle;
use symbology::{Alignment, Style};

use crate::assets::{AssetLoader, LoaderOptions};

/// Concrete icon parameters after symbol fallback resolution.
///
/// Derived state only; recomputed on every rebuild, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub image: Option<ImageHandle>,
    pub alignment: Alignment,
    pub scale: f64,
    pub heading_rad: f64,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            image: None,
            alignment: Alignment::default(),
            scale: 1.0,
            heading_rad: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// `None` when no instance symbol resolved and no image was supplied;
    /// icon geometry is then skipped (text-only labels are valid).
    pub icon: Option<IconSpec>,
    pub text: String,
}

/// Resolve a style plus optional inline overrides into concrete icon and
/// text parameters.
///
/// Text: explicit text wins; empty falls back to the text symbol content.
/// Image: explicit image wins; else the icon symbol's URL through the
/// asset loader; else the symbol's inline image. A failed URL lookup
/// degrades to an absent image rather than failing the build.
pub fn resolve(
    style: &Style,
    explicit_text: &str,
    explicit_image: Option<&ImageHandle>,
    assets: &dyn AssetLoader,
    options: Option<&LoaderOptions>,
) -> Resolution {
    let text = if explicit_text.is_empty() {
        style
            .text
            .as_ref()
            .and_then(|symbol| symbol.content.clone())
            .unwrap_or_default()
    } else {
        explicit_text.to_string()
    };

    let icon_symbol = style.instance_symbol().map(|instance| instance.as_icon());

    let image = if let Some(explicit) = explicit_image {
        Some(explicit.clone())
    } else if let Some(symbol) = &icon_symbol {
        if let Some(url) = &symbol.url {
            match assets.resolve(url, options) {
                Ok(image) => Some(image),
                Err(err) => {
                    tracing::warn!("icon image unavailable, continuing without it: {err}");
                    None
                }
            }
        } else {
            symbol.image.clone()
        }
    } else {
        None
    };

    let icon = if icon_symbol.is_none() && image.is_none() {
        None
    } else {
        let symbol = icon_symbol.unwrap_or_default();
        Some(IconSpec {
            image,
            alignment: symbol.alignment.unwrap_or_default(),
            scale: symbol.scale_or_default(),
            heading_rad: symbol.heading_rad_or_default(),
        })
    };

    Resolution { icon, text }
}
