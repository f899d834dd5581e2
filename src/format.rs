//! Line-oriented text format: `Name, Day, HH:MM - HH:MM, Color`.
//!
//! The last three comma-separated fields are day, time range and color;
//! everything before them is the name, so names may themselves contain
//! commas. Export always writes the canonical form (full weekday name,
//! lowercase hex color).

use std::fs;
use std::path::Path;

use crate::error::{ErrorCode, WeekgridError};
use crate::models::{day_label, format_time, Task};

const LINE_SHAPE: &str = "expected `Name, Day, HH:MM - HH:MM, Color`";

/// Parses one non-blank line into a task.
pub fn parse_line(line: &str) -> Result<Task, WeekgridError> {
    let mut fields = line.rsplitn(4, ',');
    let color = fields.next();
    let time = fields.next();
    let day = fields.next();
    let name = fields.next();
    let (Some(name), Some(day), Some(time), Some(color)) = (name, day, time, color) else {
        return Err(WeekgridError::new(ErrorCode::ImportParse, LINE_SHAPE));
    };
    let Some((start, end)) = time.split_once('-') else {
        return Err(WeekgridError::new(ErrorCode::ImportParse, LINE_SHAPE));
    };
    Task::from_fields(name, day, start, end, color)
}

/// Parses a whole text blob. Blank lines are skipped; the first malformed
/// line aborts the parse with its 1-based line number, so no partial task
/// list ever escapes.
pub fn parse(input: &str) -> Result<Vec<Task>, WeekgridError> {
    let mut tasks = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let task = parse_line(line).map_err(|e| WeekgridError::import_parse(idx + 1, &e))?;
        tasks.push(task);
    }
    Ok(tasks)
}

pub fn read_file(path: &Path) -> Result<Vec<Task>, WeekgridError> {
    let text = fs::read_to_string(path)
        .map_err(|e| WeekgridError::io(format!("{}: {e}", path.display())))?;
    parse(&text)
}

/// Canonical single-line form of a task.
pub fn format_task(task: &Task) -> String {
    format!(
        "{}, {}, {} - {}, {}",
        task.name,
        day_label(task.day),
        format_time(task.start),
        format_time(task.end),
        task.color.hex(),
    )
}

/// Serializes tasks in order, one per line.
pub fn write(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&format_task(task));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn parses_hex_color_line() {
        let task = parse_line("Meeting, Monday, 09:00 - 10:30, #FF0000").unwrap();
        assert_eq!(task.name, "Meeting");
        assert_eq!(task.day, Weekday::Mon);
        assert_eq!(format_time(task.start), "09:00");
        assert_eq!(format_time(task.end), "10:30");
        assert_eq!(task.color.hex(), "#ff0000");
    }

    #[test]
    fn parses_named_color_line() {
        let task = parse_line("Study at home, Tuesday, 14:00 - 16:00, red").unwrap();
        assert_eq!(task.name, "Study at home");
        assert_eq!(task.day, Weekday::Tue);
        assert_eq!(task.color.hex(), "#ff0000");
    }

    #[test]
    fn name_may_contain_commas() {
        let task = parse_line("Lunch, then errands, Wednesday, 12:00 - 13:00, teal").unwrap();
        assert_eq!(task.name, "Lunch, then errands");
        assert_eq!(task.day, Weekday::Wed);
    }

    #[test]
    fn too_few_fields_is_rejected() {
        let err = parse_line("Meeting, Monday, 09:00 - 10:30").unwrap_err();
        assert_eq!(err.code, ErrorCode::ImportParse);
        let err = parse_line("Meeting, Monday, 09:00 10:30, red").unwrap_err();
        assert_eq!(err.code, ErrorCode::ImportParse);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let tasks = parse("\nMeeting, Monday, 09:00 - 10:30, red\n\n  \nGym, Friday, 18:00 - 19:00, blue\n").unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "Meeting");
        assert_eq!(tasks[1].name, "Gym");
    }

    #[test]
    fn malformed_line_aborts_with_line_number() {
        let input = "Meeting, Monday, 09:00 - 10:30, red\nMeeting, Funday, 09:00 - 10:00, red\n";
        let err = parse(input).unwrap_err();
        assert_eq!(err.code, ErrorCode::ImportParse);
        assert_eq!(err.line, Some(2));
        assert!(err.message.contains("Funday"), "{}", err.message);
    }

    #[test]
    fn unpadded_time_is_rejected() {
        let err = parse("Meeting, Monday, 9:00 - 10:00, red").unwrap_err();
        assert_eq!(err.line, Some(1));
    }

    #[test]
    fn round_trips_through_canonical_form() {
        let input = "Meeting, Monday, 09:00 - 10:30, #FF0000\n\
                     Study at home, Tuesday, 14:00 - 16:00, red\n\
                     Late show, Sunday, 22:15 - 23:45, navy\n";
        let tasks = parse(input).unwrap();
        let text = write(&tasks);
        let reparsed = parse(&text).unwrap();
        assert_eq!(tasks, reparsed);
        // second pass is a fixpoint
        assert_eq!(write(&reparsed), text);
    }
}
