use crate::config::Config;
use crate::core::status::{StatusLogic, StoreStatus};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_state};
use crate::utils::formatting::human_size;

/// Handle the `status` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let db_path = cfg.db_path();
    let status = StatusLogic::status(&db_path);

    header("Database status");
    println!("Path         : {}", db_path.display());

    match status {
        StoreStatus::Missing => {
            println!("State        : {}missing{RESET}", color_for_state(false, false));
        }
        StoreStatus::NotPopulated => {
            println!("State        : {}not populated{RESET}", color_for_state(true, false));
            println!("Last updated : never");
        }
        StoreStatus::Ready {
            last_updated,
            counts,
            size_bytes,
        } => {
            println!("State        : {}ready{RESET}", color_for_state(true, true));
            println!("Size         : {}", human_size(size_bytes));
            println!("Last updated : {last_updated}");
            println!("Raw events   : {}", counts.raw_events);
            println!("Drink events : {}", counts.drink_events);
            println!("Weekly rows  : {}", counts.weekly_totals);
        }
    }
    Ok(())
}
