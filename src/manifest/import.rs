//! Manifest CSV import.
//!
//! The header row is matched case-insensitively against a fixed alias table;
//! unmapped headers are ignored and missing canonical columns default to
//! empty. Rows with an empty name are silently skipped. Each surviving row
//! is an upsert, so rows written before a mid-file parse error stay
//! committed.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_person;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Canonical manifest columns.
const CANONICAL: [&str; 5] = ["name", "phone", "supervisor", "supervisor_phone", "company"];

/// Known header aliases (lowercase) → canonical column.
const HEADER_ALIASES: [(&str, &str); 12] = [
    ("full name", "name"),
    ("fullname", "name"),
    ("employee name", "name"),
    ("mobile", "phone"),
    ("cell", "phone"),
    ("phone number", "phone"),
    ("manager", "supervisor"),
    ("supervisor name", "supervisor"),
    ("manager phone", "supervisor_phone"),
    ("supervisor phone", "supervisor_phone"),
    ("organization", "company"),
    ("employer", "company"),
];

/// Map one raw header to its canonical column, when it is one we know.
pub fn normalize_header(raw: &str) -> Option<&'static str> {
    let lowered = raw.trim().to_lowercase();

    for (alias, canonical) in HEADER_ALIASES {
        if lowered == alias {
            return Some(canonical);
        }
    }
    CANONICAL.iter().find(|c| **c == lowered).copied()
}

#[derive(Debug, Default)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn import_file(pool: &mut DbPool, path: &str) -> AppResult<ImportSummary> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(Path::new(path))?;

        // Column index → canonical field, for recognized headers only.
        let mapping: Vec<Option<&'static str>> = rdr
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();

        let mut summary = ImportSummary::default();

        for record in rdr.records() {
            let record = record?;

            let mut name = "";
            let mut phone = "";
            let mut supervisor = "";
            let mut supervisor_phone = "";
            let mut company = "";

            for (idx, field) in mapping.iter().enumerate() {
                let value = record.get(idx).unwrap_or("").trim();
                match field {
                    Some("name") => name = value,
                    Some("phone") => phone = value,
                    Some("supervisor") => supervisor = value,
                    Some("supervisor_phone") => supervisor_phone = value,
                    Some("company") => company = value,
                    _ => {}
                }
            }

            if name.is_empty() {
                summary.skipped += 1;
                continue;
            }

            upsert_person(
                &pool.conn,
                name,
                Some(phone),
                Some(supervisor),
                Some(supervisor_phone),
                Some(company),
            )?;
            summary.imported += 1;
        }

        ttlog(
            &pool.conn,
            "import",
            path,
            &format!(
                "Imported {} manifest record(s), skipped {}",
                summary.imported, summary.skipped
            ),
        )?;

        success(format!(
            "Imported {} record(s) to manifest ({} skipped).",
            summary.imported, summary.skipped
        ));

        Ok(summary)
    }
}
