use serde::Serialize;

/// One row of the personnel manifest.
///
/// `name` is the logical key: writing a second record with the same name
/// overwrites every contact field of the first (last write wins, no history).
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: i64,
    pub name: String,             // ⇔ personnel.name (TEXT UNIQUE NOT NULL)
    pub phone: Option<String>,    // ⇔ personnel.phone
    pub supervisor: Option<String>,
    pub supervisor_phone: Option<String>,
    pub company: Option<String>,
    pub created_at: String, // ⇔ personnel.created_at (TEXT, "YYYY-MM-DD HH:MM:SS")
    pub updated_at: String, // ⇔ personnel.updated_at
}

impl Person {
    /// Display helper: "--" for missing optional fields.
    pub fn field_or_dash(value: &Option<String>) -> &str {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => "--",
        }
    }
}
