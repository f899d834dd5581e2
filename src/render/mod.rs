pub mod png;
pub mod svg;

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::WeekgridError;
use crate::layout;
use crate::models::Task;

pub const OUTPUT_DIR: &str = "outputs";

/// Default output path, deterministic per run.
pub fn default_output_path() -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(OUTPUT_DIR).join(format!("schedule_{stamp}.png"))
}

/// Lays out the tasks, rasterizes the grid, and writes one PNG to `path`.
/// Failures leave the caller's task list untouched so the render can be
/// retried.
pub fn render_schedule(tasks: &[Task], path: &Path) -> Result<(), WeekgridError> {
    let grid = layout::lay_out(tasks);
    let doc = svg::document(&grid);
    png::write_png(&doc, path)
}
