pub mod assets;
pub mod icon;
pub mod persist;
pub mod place;
pub mod resolver;
pub mod text;

pub use assets::*;
pub use persist::*;
pub use place::*;
