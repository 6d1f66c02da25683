use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        // Single shared instance
        let mut pool: Option<DbPool> = None;

        fn get_pool<'a>(pool: &'a mut Option<DbPool>, db_path: &str) -> AppResult<&'a mut DbPool> {
            if pool.is_none() {
                *pool = Some(DbPool::new(db_path)?);
            }
            Ok(pool.as_mut().expect("pool just initialized"))
        }

        //
        // 1) MIGRATE
        //
        if *migrate {
            let p = get_pool(&mut pool, &cfg.database)?;
            run_pending_migrations(&p.conn)?;
            success("Migrations up to date.");
        }

        //
        // 2) CHECK
        //
        if *check {
            let p = get_pool(&mut pool, &cfg.database)?;
            let result: String =
                p.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                info(format!("Database integrity: {}", result));
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            let p = get_pool(&mut pool, &cfg.database)?;
            p.conn.execute_batch("VACUUM;")?;
            success("Database optimized (VACUUM).");
        }

        //
        // 4) INFO
        //
        if *show_info {
            let p = get_pool(&mut pool, &cfg.database)?;
            stats::print_db_info(p, &cfg.database)?;
        }

        if !(*migrate || *check || *vacuum || *show_info) {
            info("Nothing to do: specify --migrate, --check, --vacuum or --info.");
        }
    }
    Ok(())
}
