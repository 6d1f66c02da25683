//! Status derivation for active departures.
//!
//! Pure computation of now vs. expected return, recomputed on every read.

use crate::models::status::Status;
use chrono::{Duration, NaiveDateTime};

/// Minutes of remaining time under which a departure counts as "due soon".
pub const DEFAULT_SOON_WINDOW_MINUTES: i64 = 30;

/// Classify an active departure:
/// - Overdue  if expected return is strictly before now
/// - Soon     if less than `soon_window_minutes` remain
/// - OnTime   otherwise
pub fn classify(
    expected_return: &NaiveDateTime,
    now: &NaiveDateTime,
    soon_window_minutes: i64,
) -> Status {
    let remaining = *expected_return - *now;

    if remaining < Duration::zero() {
        Status::Overdue
    } else if remaining < Duration::minutes(soon_window_minutes) {
        Status::Soon
    } else {
        Status::OnTime
    }
}

/// Human-readable remaining time, e.g. "2h 05m remaining" or "1h 10m late".
pub fn format_remaining(expected_return: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let remaining = *expected_return - *now;
    let total_min = remaining.num_minutes();

    if total_min < 0 {
        let late = -total_min;
        format!("{}h {:02}m late", late / 60, late % 60)
    } else if total_min < 60 {
        format!("{}m remaining", total_min)
    } else {
        format!("{}h {:02}m remaining", total_min / 60, total_min % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 4)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn on_time_when_more_than_window_remains() {
        let status = classify(&at(13, 0), &at(10, 0), DEFAULT_SOON_WINDOW_MINUTES);
        assert_eq!(status, Status::OnTime);
    }

    #[test]
    fn soon_inside_window() {
        let status = classify(&at(13, 0), &at(12, 35), DEFAULT_SOON_WINDOW_MINUTES);
        assert_eq!(status, Status::Soon);
    }

    #[test]
    fn soon_at_exact_expected_minute() {
        // zero remaining is still "soon", not overdue
        let status = classify(&at(13, 0), &at(13, 0), DEFAULT_SOON_WINDOW_MINUTES);
        assert_eq!(status, Status::Soon);
    }

    #[test]
    fn overdue_once_expected_has_passed() {
        let status = classify(&at(13, 0), &at(13, 1), DEFAULT_SOON_WINDOW_MINUTES);
        assert_eq!(status, Status::Overdue);
    }

    #[test]
    fn checkout_extend_overdue_scenario() {
        // Check out at 10:00 with a 3-hour expected duration → 13:00.
        let mut expected = at(10, 0) + chrono::Duration::hours(3);
        assert_eq!(expected, at(13, 0));

        // Extend by 2 hours → 15:00.
        expected += chrono::Duration::hours(2);
        assert_eq!(expected, at(15, 0));

        // At 15:05 the departure is overdue.
        let status = classify(&expected, &at(15, 5), DEFAULT_SOON_WINDOW_MINUTES);
        assert_eq!(status, Status::Overdue);
    }

    #[test]
    fn remaining_formats() {
        assert_eq!(format_remaining(&at(13, 0), &at(10, 0)), "3h 00m remaining");
        assert_eq!(format_remaining(&at(13, 0), &at(12, 40)), "20m remaining");
        assert_eq!(format_remaining(&at(13, 0), &at(14, 10)), "1h 10m late");
    }
}
