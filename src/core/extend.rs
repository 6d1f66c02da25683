use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{apply_extension, find_departure};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// High-level business logic for the `extend` command.
pub struct ExtendLogic;

impl ExtendLogic {
    pub fn apply(pool: &mut DbPool, id: i64, hours: i64) -> AppResult<()> {
        if hours <= 0 {
            return Err(AppError::InvalidDuration(format!(
                "Extension hours must be positive, got {}.",
                hours
            )));
        }
        if hours > crate::core::checkout::MAX_DURATION_HOURS {
            return Err(AppError::InvalidDuration(format!(
                "Extension must not exceed {} hours, got {}.",
                crate::core::checkout::MAX_DURATION_HOURS,
                hours
            )));
        }

        let dep = find_departure(&pool.conn, id)?.ok_or(AppError::DepartureNotFound(id))?;

        if !dep.is_active() {
            return Err(AppError::AlreadyReturned(id));
        }

        apply_extension(&mut pool.conn, id, hours)?;

        // Re-read for the message: the update shifted expected_return.
        let updated = find_departure(&pool.conn, id)?.ok_or(AppError::DepartureNotFound(id))?;

        ttlog(
            &pool.conn,
            "extend",
            &id.to_string(),
            &format!("{} extended by {}h", dep.person_name, hours),
        )?;

        success(format!(
            "{} extended by {}h, now expected back {} (extension #{}).",
            updated.person_name,
            hours,
            updated.expected_str(),
            updated.extensions_count
        ));
        Ok(())
    }
}
