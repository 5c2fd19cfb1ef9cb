use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::AppResult;
use crate::export::range::parse_range_opt;
use crate::ui::messages::{header, warning};
use crate::utils::colors::colorize_quantity;
use crate::utils::formatting::quantity;
use crate::utils::table::Table;

/// Handle the `weekly` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Weekly { range } = cmd else {
        return Ok(());
    };

    let bounds = parse_range_opt(range.as_deref())?;
    let db_path = cfg.db_path();

    if !StatusLogic::is_initialized(&db_path) {
        warning("Database is not populated yet. Run `healthlog update` first.");
        return Ok(());
    }

    let weeks = StatusLogic::weekly_totals(&db_path, bounds);
    if weeks.is_empty() {
        warning("No weekly totals for the selected range.");
        return Ok(());
    }

    header("Weekly drink totals");
    let mut table = Table::new(&["Week start", "Week end", "Drinks", "Events"]);
    for w in &weeks {
        table.add_row(vec![
            w.week_start_date.format("%Y-%m-%d").to_string(),
            w.week_end_date.format("%Y-%m-%d").to_string(),
            colorize_quantity(w.total_quantity, &quantity(w.total_quantity)),
            w.event_count.to_string(),
        ]);
    }
    print!("{}", table.render());

    let total: f64 = weeks.iter().map(|w| w.total_quantity).sum();
    println!("\nTotal: {} over {} week(s)", quantity(total), weeks.len());
    Ok(())
}
