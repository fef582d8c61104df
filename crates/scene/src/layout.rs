use foundation::math::Vec2;

/// Per-drawable metadata read by the screen-space declutter pass.
///
/// Every drawable owned by one label carries an identical copy, so the
/// pass sees consistent data no matter which drawable it inspects first.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LayoutData {
    pub priority: f32,
    pub pixel_offset: Vec2,
}

impl LayoutData {
    pub fn new(priority: f32, pixel_offset: Vec2) -> Self {
        Self {
            priority,
            pixel_offset,
        }
    }
}
