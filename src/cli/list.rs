use std::path::Path;

use serde_json::json;

use crate::format;
use crate::output;

pub fn run(file: &Path, json_output: bool) -> i32 {
    match format::read_file(file) {
        Ok(tasks) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "tasks": output::json::task_list_json(&tasks)
                    })))
                    .unwrap()
                );
            } else {
                output::text::print_task_list(&tasks);
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
