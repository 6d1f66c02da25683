/// ANSI color helper utilities for terminal output.
use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Status color:
/// overdue → red, due soon → yellow, on time → green
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::OnTime => GREEN,
        Status::Soon => YELLOW,
        Status::Overdue => RED,
    }
}

/// Returns GREY when the field is empty, and RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "--" => RESET,
        _ => GREY,
    }
}
