use crate::utils::time;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One departure event: open until a return is recorded, then terminal.
///
/// Contact fields are snapshotted from the manifest at check-out time so a
/// later manifest edit does not rewrite history.
#[derive(Debug, Clone, Serialize)]
pub struct Departure {
    pub id: i64,
    pub person_name: String, // free-text reference to personnel.name, not an FK
    pub destination: String,
    pub departed_at: NaiveDateTime,    // ⇔ departures.departed_at (TEXT)
    pub expected_return: NaiveDateTime, // ⇔ departures.expected_return (TEXT)
    pub actual_return: Option<NaiveDateTime>, // NULL while out
    pub phone: Option<String>,
    pub supervisor: Option<String>,
    pub company: Option<String>,
    pub extensions_count: i64,
}

impl Departure {
    /// Constructor for departures created from the CLI.
    /// `departed_at` defaults to now, `actual_return` to open.
    pub fn new(
        person_name: String,
        destination: String,
        expected_return: NaiveDateTime,
        phone: Option<String>,
        supervisor: Option<String>,
        company: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            person_name,
            destination,
            departed_at: time::now(),
            expected_return,
            actual_return: None,
            phone,
            supervisor,
            company,
            extensions_count: 0,
        }
    }

    /// A departure is active iff no return has been recorded.
    pub fn is_active(&self) -> bool {
        self.actual_return.is_none()
    }

    pub fn departed_str(&self) -> String {
        time::fmt_dt(&self.departed_at)
    }

    pub fn expected_str(&self) -> String {
        time::fmt_dt(&self.expected_return)
    }
}
