/// Whether a drawable may be mutated after construction.
///
/// `Static` lets the rendering substrate cache or double-buffer freely;
/// `Dynamic` forbids that so in-place edits (text patches) stay visible.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum DataVariance {
    #[default]
    Static,
    Dynamic,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum DepthFunction {
    #[default]
    Less,
    Always,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DepthState {
    pub function: DepthFunction,
    pub write: bool,
}

impl DepthState {
    /// Always pass, never write: the state labels render with so they are
    /// neither occluded by terrain nor occluding each other. Stacking is
    /// the declutter pass's job.
    pub fn always_no_write() -> Self {
        Self {
            function: DepthFunction::Always,
            write: false,
        }
    }
}

impl Default for DepthState {
    fn default() -> Self {
        Self {
            function: DepthFunction::Less,
            write: true,
        }
    }
}

/// Subtree render state applied by a geometry container.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct StateSet {
    pub depth: Option<DepthState>,
    pub lighting: Option<bool>,
}

impl StateSet {
    pub fn set_depth(&mut self, depth: DepthState) {
        self.depth = Some(depth);
    }

    pub fn set_lighting_if_not_set(&mut self, lighting: bool) {
        if self.lighting.is_none() {
            self.lighting = Some(lighting);
        }
    }
}
