use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    EmptyName,
    InvalidDay,
    InvalidTime,
    EndNotAfterStart,
    InvalidColor,
    ImportParse,
    OutOfRange,
    Io,
    Render,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::InvalidDay => "INVALID_DAY",
            Self::InvalidTime => "INVALID_TIME",
            Self::EndNotAfterStart => "END_NOT_AFTER_START",
            Self::InvalidColor => "INVALID_COLOR",
            Self::ImportParse => "IMPORT_PARSE",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::Io => "IO",
            Self::Render => "RENDER",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct WeekgridError {
    pub code: ErrorCode,
    pub message: String,
    /// 1-based line number, set for import parse errors.
    pub line: Option<usize>,
}

impl WeekgridError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            line: None,
        }
    }

    pub fn empty_name() -> Self {
        Self::new(ErrorCode::EmptyName, "Task name must not be empty")
    }

    pub fn invalid_day(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidDay,
            format!("'{value}' is not a weekday. Use Monday..Sunday (or Mon..Sun)."),
        )
    }

    pub fn invalid_time(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidTime,
            format!("'{value}' is not a valid time. Use HH:MM (24-hour, zero-padded)."),
        )
    }

    pub fn end_not_after_start(start: &str, end: &str) -> Self {
        Self::new(
            ErrorCode::EndNotAfterStart,
            format!("Task must end after it starts (got {start} - {end})"),
        )
    }

    pub fn invalid_color(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidColor,
            format!("'{value}' is not a valid color. Use #RRGGBB or a known color name."),
        )
    }

    pub fn import_parse(line: usize, cause: &WeekgridError) -> Self {
        Self {
            code: ErrorCode::ImportParse,
            message: format!("Line {line}: {}", cause.message),
            line: Some(line),
        }
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::new(
            ErrorCode::OutOfRange,
            format!("Task position {index} is out of range (store holds {len})"),
        )
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Io, message)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Render, message)
    }
}

impl From<std::io::Error> for WeekgridError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}
