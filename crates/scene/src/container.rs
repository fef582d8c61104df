use foundation::math::Vec3;

use crate::drawable::Drawable;
use crate::shader::ShaderProgramId;
use crate::state::StateSet;

/// How a container reports its bounding sphere to culling.
///
/// `ControlPoint` collapses the bound to the anchor at the local origin so
/// horizon/occlusion culling keys off the geographic position, not the
/// (screen-space sized) icon and text extent.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum BoundPolicy {
    #[default]
    Geometry,
    ControlPoint,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f64,
}

/// Flat group of drawables sharing one state set, the leaf unit the
/// rendering substrate attaches under a position transform.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GeometryContainer {
    drawables: Vec<Drawable>,
    pub state: StateSet,
    pub bound_policy: BoundPolicy,
    shader_program: Option<ShaderProgramId>,
}

impl GeometryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn drawables_mut(&mut self) -> &mut [Drawable] {
        &mut self.drawables
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn shader_program(&self) -> Option<ShaderProgramId> {
        self.shader_program
    }

    pub fn set_shader_program(&mut self, program: ShaderProgramId) {
        self.shader_program = Some(program);
    }

    pub fn bounding_sphere(&self) -> BoundingSphere {
        match self.bound_policy {
            BoundPolicy::ControlPoint => BoundingSphere {
                center: Vec3::ZERO,
                radius: 0.0,
            },
            BoundPolicy::Geometry => {
                let mut sphere = BoundingSphere {
                    center: Vec3::ZERO,
                    radius: 0.0,
                };
                for drawable in &self.drawables {
                    let extent = drawable.extent();
                    for corner in [extent.min, extent.max] {
                        let r = (corner.x * corner.x + corner.y * corner.y).sqrt();
                        sphere.radius = sphere.radius.max(r);
                    }
                }
                sphere
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundPolicy, GeometryContainer};
    use crate::drawable::{Drawable, TextEncoding};
    use foundation::math::{Vec2, Vec3};

    #[test]
    fn control_point_bound_collapses_to_origin() {
        let mut container = GeometryContainer::new();
        container.add(Drawable::text(
            "far away",
            TextEncoding::Undefined,
            Vec2::new(500.0, 0.0),
        ));
        container.bound_policy = BoundPolicy::ControlPoint;

        let sphere = container.bounding_sphere();
        assert_eq!(sphere.center, Vec3::ZERO);
        assert_eq!(sphere.radius, 0.0);
    }

    #[test]
    fn geometry_bound_covers_drawables() {
        let mut container = GeometryContainer::new();
        container.add(Drawable::text(
            "x",
            TextEncoding::Undefined,
            Vec2::new(3.0, 4.0),
        ));
        assert_eq!(container.bounding_sphere().radius, 5.0);
    }
}
