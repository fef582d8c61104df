use std::collections::BTreeMap;

use crate::container::GeometryContainer;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShaderProgramId(pub u32);

/// Process-wide shader-generation cache.
///
/// Created once at startup and passed explicitly wherever a subtree needs
/// (re)generation; there is no implicit singleton. Keys are kept in a
/// `BTreeMap` so program ids are assigned deterministically.
///
/// Callers own synchronization; this type is not internally locked.
#[derive(Debug, Default)]
pub struct ShaderCache {
    programs: BTreeMap<String, ShaderProgramId>,
    next_id: u32,
}

impl ShaderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate (or fetch) the shader program for `container` and stamp it
    /// on the container. `tag` is the stable identifier for the subtree
    /// kind; containers with the same tag and render state share a program.
    pub fn run(&mut self, container: &mut GeometryContainer, tag: &str) {
        let key = format!(
            "{tag}|depth={:?}|lighting={:?}",
            container.state.depth, container.state.lighting
        );
        let next_id = &mut self.next_id;
        let program = *self.programs.entry(key).or_insert_with(|| {
            let id = ShaderProgramId(*next_id);
            *next_id += 1;
            id
        });
        container.set_shader_program(program);
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
