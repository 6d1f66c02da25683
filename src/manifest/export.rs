//! Manifest export: the full personnel table as CSV or JSON, written to a
//! date-stamped file by default.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::list_personnel;
use crate::errors::{AppError, AppResult};
use crate::manifest::{ExportFormat, notify_export_success};
use crate::models::person::Person;
use chrono::Local;
use csv::Writer;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_filename(format)),
        };

        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "File '{}' already exists. Use --force to overwrite.",
                path.display()
            )));
        }

        let people = list_personnel(pool)?;

        match format {
            ExportFormat::Csv => write_csv(&path, &people)?,
            ExportFormat::Json => write_json(&path, &people)?,
        }

        ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} manifest record(s)", people.len()),
        )?;

        notify_export_success("Manifest", &path);
        Ok(())
    }
}

/// Default output name embeds the current date, e.g.
/// `personnel_manifest_20250704.csv`.
pub fn default_filename(format: &ExportFormat) -> String {
    format!(
        "personnel_manifest_{}.{}",
        Local::now().format("%Y%m%d"),
        format.as_str()
    )
}

fn write_csv(path: &Path, people: &[Person]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record([
        "name",
        "phone",
        "supervisor",
        "supervisor_phone",
        "company",
        "created_at",
        "updated_at",
    ])
    .map_err(|e| AppError::Export(e.to_string()))?;

    for p in people {
        wtr.write_record(&[
            p.name.clone(),
            p.phone.clone().unwrap_or_default(),
            p.supervisor.clone().unwrap_or_default(),
            p.supervisor_phone.clone().unwrap_or_default(),
            p.company.clone().unwrap_or_default(),
            p.created_at.clone(),
            p.updated_at.clone(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_json(path: &Path, people: &[Person]) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, people)
        .map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
