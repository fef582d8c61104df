use foundation::bounds::Aabb2;
use foundation::math::Vec2;

use crate::image::ImageHandle;
use crate::layout::LayoutData;
use crate::state::DataVariance;

/// Character encoding of a text drawable's content.
///
/// `Undefined` lets the text substrate pick based on the bytes themselves.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Undefined,
    Ascii,
    Utf8,
    Utf16,
}

/// Which point of the rendered text block sits at the drawable position.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TextAnchor {
    LeftTop,
    LeftCenter,
    LeftBottom,
    CenterTop,
    #[default]
    CenterCenter,
    CenterBottom,
    RightTop,
    RightCenter,
    RightBottom,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawableKind {
    /// Textured quad with rotation and scale baked into the vertices.
    /// The declutter pass reads vertices directly and ignores transform
    /// ancestry, so orientation must never live in a parent transform.
    ImageQuad {
        image: ImageHandle,
        vertices: [Vec2; 4],
    },
    Text {
        content: String,
        encoding: TextEncoding,
        position: Vec2,
        anchor: TextAnchor,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub kind: DrawableKind,
    pub layout: Option<LayoutData>,
    pub variance: DataVariance,
}

impl Drawable {
    pub fn image_quad(image: ImageHandle, vertices: [Vec2; 4]) -> Self {
        Self {
            kind: DrawableKind::ImageQuad { image, vertices },
            layout: None,
            variance: DataVariance::default(),
        }
    }

    pub fn text(content: impl Into<String>, encoding: TextEncoding, position: Vec2) -> Self {
        Self {
            kind: DrawableKind::Text {
                content: content.into(),
                encoding,
                position,
                anchor: TextAnchor::default(),
            },
            layout: None,
            variance: DataVariance::default(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, DrawableKind::Text { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, DrawableKind::ImageQuad { .. })
    }

    /// Local-space extent; a text drawable reports its anchor point only,
    /// since glyph metrics belong to the text substrate.
    pub fn extent(&self) -> Aabb2 {
        match &self.kind {
            DrawableKind::ImageQuad { vertices, .. } => Aabb2::from_points(vertices),
            DrawableKind::Text { position, .. } => Aabb2::new(*position, *position),
        }
    }
}
