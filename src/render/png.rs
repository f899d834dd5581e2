//! Rasterizes the SVG scene and persists it as a PNG.

use std::fs;
use std::path::Path;

use resvg::{tiny_skia, usvg};

use crate::error::WeekgridError;

pub fn rasterize(svg: &str) -> Result<tiny_skia::Pixmap, WeekgridError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| WeekgridError::render(format!("SVG parse failed: {e}")))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| WeekgridError::render("invalid canvas size"))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Writes exactly one PNG, creating the output directory if absent.
pub fn write_png(svg: &str, path: &Path) -> Result<(), WeekgridError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| WeekgridError::io(format!("{}: {e}", parent.display())))?;
        }
    }
    let pixmap = rasterize(svg)?;
    pixmap
        .save_png(path)
        .map_err(|e| WeekgridError::io(format!("{}: {e}", path.display())))
}
