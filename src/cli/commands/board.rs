use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::{classify, format_remaining};
use crate::db::pool::DbPool;
use crate::db::queries::{load_active_departures, load_extensions};
use crate::errors::AppResult;
use crate::models::person::Person;
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RESET, color_for_status};
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Board { details } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let active = load_active_departures(&mut pool)?;

        if active.is_empty() {
            success("Everyone is in camp!");
            return Ok(());
        }

        let now = time::now();
        let mut overdue_count = 0;

        for dep in &active {
            let status = classify(&dep.expected_return, &now, cfg.soon_window_minutes);
            if status.is_overdue() {
                overdue_count += 1;
            }

            let color = color_for_status(status);

            println!(
                "{}[{}]{} {}{}{}  →  {}",
                GREY, dep.id, RESET, color, dep.person_name, RESET, dep.destination
            );
            println!(
                "     departed {}  |  expected {}  |  {}{}: {}{}",
                dep.departed_str(),
                dep.expected_str(),
                color,
                status.as_str(),
                format_remaining(&dep.expected_return, &now),
                RESET
            );
            println!(
                "     phone: {}  |  supervisor: {}  |  company: {}",
                Person::field_or_dash(&dep.phone),
                Person::field_or_dash(&dep.supervisor),
                Person::field_or_dash(&dep.company),
            );
            if dep.extensions_count > 0 {
                println!("     extended {} time(s)", dep.extensions_count);
            }

            if *details {
                for ext in load_extensions(&mut pool, dep.id)? {
                    println!(
                        "       {}+{}h at {}{}",
                        GREY,
                        ext.hours,
                        time::fmt_dt(&ext.extended_at),
                        RESET
                    );
                }
            }
        }

        println!();
        println!(
            "{} out, {} overdue",
            active.len(),
            overdue_count
        );
    }
    Ok(())
}
