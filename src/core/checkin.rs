use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_departure, mark_returned};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time;

/// High-level business logic for the `back` command.
pub struct ReturnLogic;

impl ReturnLogic {
    /// Record a return. Idempotent: a second call on the same departure is a
    /// no-op and leaves the stored timestamp untouched.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let dep = find_departure(&pool.conn, id)?.ok_or(AppError::DepartureNotFound(id))?;

        if !dep.is_active() {
            warning(format!(
                "{} (id {}) already returned at {}; nothing to do.",
                dep.person_name,
                id,
                dep.actual_return.map(|d| time::fmt_dt(&d)).unwrap_or_default()
            ));
            return Ok(());
        }

        let now = time::now();
        mark_returned(&pool.conn, id, &now)?;

        ttlog(
            &pool.conn,
            "back",
            &id.to_string(),
            &format!("{} returned from {}", dep.person_name, dep.destination),
        )?;

        success(format!(
            "{} marked as returned at {}.",
            dep.person_name,
            time::fmt_dt(&now)
        ));
        Ok(())
    }
}
