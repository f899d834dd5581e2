pub mod cli;
pub mod error;
pub mod format;
pub mod layout;
pub mod models;
pub mod output;
pub mod render;
pub mod session;
pub mod store;
