use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_person, insert_departure, upsert_person};
use crate::errors::{AppError, AppResult};
use crate::models::departure::Departure;
use crate::ui::messages::success;
use crate::utils::time;
use chrono::Duration;

/// Upper bound for one expected duration or extension (a year).
/// Keeps the chrono arithmetic well away from overflow territory.
pub const MAX_DURATION_HOURS: i64 = 24 * 365;

/// High-level business logic for the `out` command.
pub struct CheckoutLogic;

impl CheckoutLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        person_name: &str,
        destination: &str,
        hours: Option<i64>,
        until: Option<&str>,
        phone: Option<&str>,
        supervisor: Option<&str>,
        supervisor_phone: Option<&str>,
        company: Option<&str>,
    ) -> AppResult<()> {
        let name = person_name.trim();
        let dest = destination.trim();

        if name.is_empty() {
            return Err(AppError::MissingField("name".into()));
        }
        if dest.is_empty() {
            return Err(AppError::MissingField("destination".into()));
        }

        let now = time::now();

        // ------------------------------------------------
        // Resolve the expected return time
        // ------------------------------------------------
        let expected_return = match (hours, until) {
            (Some(_), Some(_)) => {
                return Err(AppError::InvalidDuration(
                    "Use either --hours or --until, not both.".into(),
                ));
            }
            (None, Some(raw)) => {
                let dt = time::parse_dt(raw)
                    .ok_or_else(|| AppError::InvalidDateTime(raw.to_string()))?;
                if dt <= now {
                    return Err(AppError::InvalidDateTime(format!(
                        "Expected return '{}' is not in the future.",
                        raw
                    )));
                }
                dt
            }
            (h, None) => {
                let h = h.unwrap_or(cfg.default_duration_hours);
                if h <= 0 {
                    return Err(AppError::InvalidDuration(format!(
                        "Expected duration must be positive, got {}.",
                        h
                    )));
                }
                if h > MAX_DURATION_HOURS {
                    return Err(AppError::InvalidDuration(format!(
                        "Expected duration must not exceed {} hours, got {}.",
                        MAX_DURATION_HOURS, h
                    )));
                }
                now + Duration::hours(h)
            }
        };

        // ------------------------------------------------
        // Snapshot contact fields from the manifest
        // ------------------------------------------------
        // A known person fills in whatever the caller didn't override.
        // An unknown person is added to the manifest first so the next
        // check-out finds them.
        let known = find_person(&pool.conn, name)?;

        let (snap_phone, snap_supervisor, snap_company) = match &known {
            Some(p) => (
                phone.map(str::to_string).or_else(|| p.phone.clone()),
                supervisor.map(str::to_string).or_else(|| p.supervisor.clone()),
                company.map(str::to_string).or_else(|| p.company.clone()),
            ),
            None => {
                upsert_person(&pool.conn, name, phone, supervisor, supervisor_phone, company)?;
                (
                    phone.map(str::to_string),
                    supervisor.map(str::to_string),
                    company.map(str::to_string),
                )
            }
        };

        let dep = Departure::new(
            name.to_string(),
            dest.to_string(),
            expected_return,
            snap_phone,
            snap_supervisor,
            snap_company,
        );

        let id = insert_departure(&pool.conn, &dep)?;

        ttlog(
            &pool.conn,
            "out",
            &id.to_string(),
            &format!("{} departed to {}", name, dest),
        )?;

        success(format!(
            "{} logged as departed to {} (id {}, expected back {}).",
            name,
            dest,
            id,
            dep.expected_str()
        ));
        Ok(())
    }
}
