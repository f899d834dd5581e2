use std::path::Path;

use crate::format;
use crate::models::Task;

pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for (i, t) in tasks.iter().enumerate() {
        println!("  {}. {}", i + 1, format::format_task(t));
    }
}

pub fn print_render_result(count: usize, path: &Path) {
    println!("Rendered {count} task(s) to {}", path.display());
}
