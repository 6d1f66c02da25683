use chrono::{Local, NaiveDateTime, Timelike};

/// Storage format for every timestamp column (local naive time).
pub const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, truncated to whole seconds to match the DB format.
pub fn now() -> NaiveDateTime {
    let n = Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

/// Start of the current local day (00:00:00).
pub fn start_of_today() -> NaiveDateTime {
    Local::now().date_naive().and_hms_opt(0, 0, 0).unwrap_or_else(|| now())
}

pub fn fmt_dt(dt: &NaiveDateTime) -> String {
    dt.format(DT_FORMAT).to_string()
}

/// Timestamp for internal `log` rows. Every writer goes through this so
/// `ORDER BY date` sorts one single format.
pub fn log_timestamp() -> String {
    fmt_dt(&now())
}

/// Parse "YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DD HH:MM".
pub fn parse_dt(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, DT_FORMAT) {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }
    None
}
