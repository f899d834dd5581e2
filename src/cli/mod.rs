pub mod commands;
pub mod export;
pub mod list;
pub mod render;

pub use commands::*;
