use chrono::{NaiveTime, Weekday};
use serde::{Serialize, Serializer};

use crate::error::WeekgridError;
use crate::models::Color;

/// The seven day columns, in render order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One schedule entry. Constructed through `from_fields`, which normalizes
/// and validates raw form/import input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub name: String,
    #[serde(serialize_with = "ser_day")]
    pub day: Weekday,
    #[serde(serialize_with = "ser_time")]
    pub start: NaiveTime,
    #[serde(serialize_with = "ser_time")]
    pub end: NaiveTime,
    pub color: Color,
}

impl Task {
    /// Validates the five raw fields and returns a normalized record, or the
    /// first specific rejection. Pure; no store mutation happens here.
    pub fn from_fields(
        name: &str,
        day: &str,
        start: &str,
        end: &str,
        color: &str,
    ) -> Result<Self, WeekgridError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeekgridError::empty_name());
        }
        let day = parse_day(day)?;
        let start_time = parse_time(start)?;
        let end_time = parse_time(end)?;
        if end_time <= start_time {
            return Err(WeekgridError::end_not_after_start(
                start.trim(),
                end.trim(),
            ));
        }
        let color = Color::parse(color)?;
        Ok(Self {
            name: name.to_string(),
            day,
            start: start_time,
            end: end_time,
            color,
        })
    }
}

/// Case-insensitive weekday name, full ("monday") or 3-letter ("mon").
pub fn parse_day(s: &str) -> Result<Weekday, WeekgridError> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| WeekgridError::invalid_day(s.trim()))
}

/// Strict zero-padded 24-hour `HH:MM`.
pub fn parse_time(s: &str) -> Result<NaiveTime, WeekgridError> {
    let s = s.trim();
    let invalid = || WeekgridError::invalid_time(s);
    if s.len() != 5 || s.as_bytes()[2] != b':' {
        return Err(invalid());
    }
    let hours: u32 = s[..2].parse().map_err(|_| invalid())?;
    let minutes: u32 = s[3..].parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

fn ser_day<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(day_label(*day))
}

fn ser_time<S: Serializer>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&t.format("%H:%M"))
}
