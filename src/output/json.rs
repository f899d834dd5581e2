use serde_json::{json, Value};

use crate::error::WeekgridError;
use crate::models::Task;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &WeekgridError) -> Value {
    let mut e = json!({
        "code": err.code.as_str(),
        "message": err.message
    });
    if let Some(line) = err.line {
        e["line"] = json!(line);
    }
    json!({
        "success": false,
        "error": e
    })
}

pub fn task_json(t: &Task) -> Value {
    // Task's Serialize impl already emits readable day/time/color strings
    serde_json::to_value(t).unwrap_or(Value::Null)
}

pub fn task_list_json(tasks: &[Task]) -> Value {
    Value::Array(tasks.iter().map(task_json).collect())
}
