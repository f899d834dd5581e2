pub mod color;
pub mod task;

pub use color::*;
pub use task::*;
