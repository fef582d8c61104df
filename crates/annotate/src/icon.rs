use foundation::bounds::Aabb2;
use foundation::math::Vec2;
use scene::{Drawable, ImageHandle};
use symbology::Alignment;

/// Offset that moves the icon quad so the chosen alignment point sits at
/// the origin (the geographic anchor). Units are scaled image pixels.
///
/// `s`/`t` are the effective (scaled) width and height. Left alignments
/// shift the quad right (`+s/2`) so its left edge lands on the anchor,
/// and so on for the other eight cases.
pub fn anchor_offset(alignment: Alignment, s: f64, t: f64) -> Vec2 {
    let x = match alignment {
        Alignment::LeftTop | Alignment::LeftCenter | Alignment::LeftBottom => s / 2.0,
        Alignment::CenterTop | Alignment::CenterCenter | Alignment::CenterBottom => 0.0,
        Alignment::RightTop | Alignment::RightCenter | Alignment::RightBottom => -s / 2.0,
    };
    let y = match alignment {
        Alignment::LeftTop | Alignment::CenterTop | Alignment::RightTop => -t / 2.0,
        Alignment::LeftCenter | Alignment::CenterCenter | Alignment::RightCenter => 0.0,
        Alignment::LeftBottom | Alignment::CenterBottom | Alignment::RightBottom => t / 2.0,
    };
    Vec2::new(x, y)
}

/// Build the oriented icon quad and its axis-aligned extent.
///
/// The heading rotation is baked into the vertices here; the declutter
/// pass reads drawables without their transform ancestry, so a rotation
/// applied via a parent transform would be invisible to it.
pub fn build_icon(
    image: &ImageHandle,
    alignment: Alignment,
    scale: f64,
    heading_rad: f64,
) -> (Drawable, Aabb2) {
    let s = scale * image.width as f64;
    let t = scale * image.height as f64;
    let offset = anchor_offset(alignment, s, t);

    let corners = [
        Vec2::new(-s / 2.0, -t / 2.0),
        Vec2::new(s / 2.0, -t / 2.0),
        Vec2::new(s / 2.0, t / 2.0),
        Vec2::new(-s / 2.0, t / 2.0),
    ];
    let vertices = corners.map(|corner| (corner + offset).rotated_cw(heading_rad));

    let bounds = Aabb2::from_points(&vertices);
    (Drawable::image_quad(image.clone(), vertices), bounds)
}
