use std::path::{Path, PathBuf};

use serde_json::json;

use crate::error::WeekgridError;
use crate::output;
use crate::render;
use crate::session::{NoPicker, Session};

pub fn run(file: Option<&Path>, out: Option<&Path>, json_output: bool) -> i32 {
    match run_inner(file, out) {
        Ok((count, path)) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "tasks": count,
                        "path": path.to_string_lossy()
                    })))
                    .unwrap()
                );
            } else {
                output::text::print_render_result(count, &path);
            }
            0
        }
        Err(e) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&output::json::error(&e)).unwrap());
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

fn run_inner(file: Option<&Path>, out: Option<&Path>) -> Result<(usize, PathBuf), WeekgridError> {
    let mut session = Session::new();
    match file {
        Some(path) => {
            session.import_file(path)?;
        }
        None => {
            // headless stand-in for the file dialog: cancelling it means
            // starting from an empty schedule, not an error
            session.import_interactive(&mut NoPicker)?;
        }
    }
    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(render::default_output_path);
    session.render_to(&path)?;
    Ok((session.store().len(), path))
}
