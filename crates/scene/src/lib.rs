pub mod container;
pub mod drawable;
pub mod image;
pub mod layout;
pub mod shader;
pub mod state;

pub use container::*;
pub use drawable::*;
pub use image::*;
pub use layout::*;
pub use shader::*;
pub use state::*;
