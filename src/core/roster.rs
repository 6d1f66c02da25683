use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{list_personnel, upsert_person};
use crate::errors::{AppError, AppResult};
use crate::models::person::Person;
use crate::ui::messages::{info, success};
use crate::utils::colors::{CYAN, GREY, RESET};

/// High-level business logic for the `personnel` command.
pub struct RosterLogic;

impl RosterLogic {
    /// Print the whole manifest, ordered by name.
    pub fn list(pool: &mut DbPool) -> AppResult<()> {
        let people = list_personnel(pool)?;

        if people.is_empty() {
            info("No personnel in manifest yet. Use 'camplog import' or 'personnel --add'.");
            return Ok(());
        }

        println!(
            "{}{:<25} {:<15} {:<20} {:<15} {:<20}{}",
            CYAN, "NAME", "PHONE", "SUPERVISOR", "SUP. PHONE", "COMPANY", RESET
        );
        for p in &people {
            println!(
                "{:<25} {:<15} {:<20} {:<15} {:<20}",
                p.name,
                Person::field_or_dash(&p.phone),
                Person::field_or_dash(&p.supervisor),
                Person::field_or_dash(&p.supervisor_phone),
                Person::field_or_dash(&p.company),
            );
        }
        println!("{}{} record(s){}", GREY, people.len(), RESET);
        Ok(())
    }

    /// Upsert a single manifest record from the CLI (last write wins).
    pub fn upsert(
        pool: &mut DbPool,
        name: &str,
        phone: Option<&str>,
        supervisor: Option<&str>,
        supervisor_phone: Option<&str>,
        company: Option<&str>,
    ) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::MissingField("name".into()));
        }

        upsert_person(&pool.conn, name, phone, supervisor, supervisor_phone, company)?;

        ttlog(
            &pool.conn,
            "personnel",
            name,
            "Manifest record added or updated",
        )?;

        success(format!("Manifest record for {} saved.", name));
        Ok(())
    }
}
