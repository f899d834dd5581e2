//! Maps tasks onto a day-by-time grid: seven fixed day columns, a linear
//! time axis, and greedy lane assignment so overlapping tasks on the same
//! day sit side by side.

use chrono::{NaiveTime, Timelike};

use crate::models::{format_time, Color, Task, WEEK};

/// Axis bounds when the store is empty: the full day.
const EMPTY_FIRST_HOUR: u32 = 0;
const EMPTY_LAST_HOUR: u32 = 24;

/// One drawable rectangle, in grid coordinates. `day` indexes the Monday-first
/// column, `lane` the sub-column within it, `lanes` the sub-column count for
/// that whole day (every box in a day shares the same fractional width).
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBox {
    pub day: usize,
    pub lane: usize,
    pub lanes: usize,
    pub start_hours: f32,
    pub end_hours: f32,
    pub color: Color,
    pub label: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub boxes: Vec<TaskBox>,
    /// Top of the time axis, whole hour.
    pub first_hour: u32,
    /// Bottom of the time axis, whole hour.
    pub last_hour: u32,
}

pub fn time_to_hours(t: NaiveTime) -> f32 {
    t.hour() as f32 + t.minute() as f32 / 60.0
}

/// Lays out the whole store. The time axis spans the floor of the earliest
/// start to the ceiling of the latest end; an empty store spans 0..24.
pub fn lay_out(tasks: &[Task]) -> GridLayout {
    let (first_hour, last_hour) = axis_bounds(tasks);
    let mut boxes = Vec::with_capacity(tasks.len());

    for (day_index, day) in WEEK.iter().enumerate() {
        // store order within a day is the tie-break for equal start times,
        // so collect in store order and sort stably by start
        let mut day_tasks: Vec<&Task> = tasks.iter().filter(|t| t.day == *day).collect();
        day_tasks.sort_by_key(|t| t.start);

        let (assignments, lanes) = assign_lanes(&day_tasks);
        for (task, lane) in day_tasks.iter().zip(assignments) {
            boxes.push(TaskBox {
                day: day_index,
                lane,
                lanes,
                start_hours: time_to_hours(task.start),
                end_hours: time_to_hours(task.end),
                color: task.color,
                label: task.name.clone(),
                time_label: format!("{} - {}", format_time(task.start), format_time(task.end)),
            });
        }
    }

    GridLayout {
        boxes,
        first_hour,
        last_hour,
    }
}

fn axis_bounds(tasks: &[Task]) -> (u32, u32) {
    if tasks.is_empty() {
        return (EMPTY_FIRST_HOUR, EMPTY_LAST_HOUR);
    }
    let first = tasks.iter().map(|t| t.start.hour()).min().unwrap_or(0);
    let last = tasks
        .iter()
        .map(|t| t.end.hour() + u32::from(t.end.minute() > 0))
        .max()
        .unwrap_or(24);
    (first, last)
}

/// Greedy interval coloring over tasks sorted by start time: each task takes
/// the lowest-numbered lane whose previous occupant has ended. Two tasks
/// overlap iff `max(start1, start2) < min(end1, end2)`, so a task starting
/// exactly when another ends shares its lane.
fn assign_lanes(day_tasks: &[&Task]) -> (Vec<usize>, usize) {
    let mut lane_ends: Vec<NaiveTime> = Vec::new();
    let mut assignments = Vec::with_capacity(day_tasks.len());

    for task in day_tasks {
        let lane = lane_ends.iter().position(|end| *end <= task.start);
        match lane {
            Some(i) => {
                lane_ends[i] = task.end;
                assignments.push(i);
            }
            None => {
                lane_ends.push(task.end);
                assignments.push(lane_ends.len() - 1);
            }
        }
    }

    (assignments, lane_ends.len().max(1))
}
