use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time;

/// Read-only aggregations over the departure history.
pub struct StatsLogic;

impl StatsLogic {
    pub fn print_stats(pool: &mut DbPool) -> AppResult<()> {
        header("Camp statistics");

        let today_start = time::start_of_today();

        let active = stats::count_active(pool)?;
        let returned_today = stats::count_returned_since(pool, &today_start)?;
        let departed_today = stats::count_departed_since(pool, &today_start)?;
        let avg = stats::avg_duration_hours(pool)?;

        println!("{}• Currently out:{}   {}{}{}", CYAN, RESET, GREEN, active, RESET);
        println!("{}• Returned today:{}  {}", CYAN, RESET, returned_today);
        println!("{}• Departures today:{} {}", CYAN, RESET, departed_today);

        // Unavailable (not zero) until at least one departure has returned.
        match avg {
            Some(hours) => {
                println!("{}• Avg duration:{}    {:.1}h", CYAN, RESET, hours)
            }
            None => println!("{}• Avg duration:{}    {}N/A{}", CYAN, RESET, GREY, RESET),
        }

        let top = stats::top_destinations(pool, 10)?;
        if !top.is_empty() {
            println!("\n{}Top destinations:{}", YELLOW, RESET);
            for (dest, count) in &top {
                println!("  {:<30} {}", dest, count);
            }
        }

        println!();
        Ok(())
    }
}
