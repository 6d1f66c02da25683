use chrono::NaiveDateTime;
use serde::Serialize;

/// Append-only audit record: pushes the owning departure's expected return
/// forward by `hours`. Never mutated or deleted.
#[derive(Debug, Clone, Serialize)]
pub struct Extension {
    pub id: i64,
    pub departure_id: i64,
    pub hours: i64,
    pub extended_at: NaiveDateTime,
}
