pub mod alignment;
pub mod instance;
pub mod style;
pub mod text;

pub use alignment::*;
pub use instance::*;
pub use style::*;
pub use text::*;
