//! Drink events and their quantities.

use crate::models::{DrinkEvent, Event};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_QUANTITY: f64 = 1.0;

// "1.5 beer", ".5 wine", "2", "２ 杯" (full-width digits)
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9０-９]*\.?[0-9０-９]+)").expect("valid quantity pattern")
});

/// Every event carrying the drink label, valid or not, in input order.
pub fn extract(events: &[Event]) -> Vec<DrinkEvent> {
    let drinks: Vec<DrinkEvent> = events
        .iter()
        .filter(|ev| ev.is_drink())
        .map(|ev| {
            DrinkEvent::new(
                ev.effective_date(),
                quantity_from_comment(ev.comments()),
                ev.comments().map(str::to_string),
            )
        })
        .collect();

    tracing::info!(drinks = drinks.len(), "extracted drink events");
    drinks
}

/// Leading numeric token of the trimmed comment, else 1.0.
pub fn quantity_from_comment(comment: Option<&str>) -> f64 {
    let Some(comment) = comment else {
        return DEFAULT_QUANTITY;
    };

    let Some(m) = LEADING_NUMBER.captures(comment.trim()).and_then(|c| c.get(1)) else {
        return DEFAULT_QUANTITY;
    };

    match ascii_digits(m.as_str()).parse::<f64>() {
        Ok(q) => {
            tracing::debug!(quantity = q, comment, "parsed drink quantity");
            q
        }
        Err(e) => {
            tracing::warn!(comment, error = %e, "failed to parse drink quantity");
            DEFAULT_QUANTITY
        }
    }
}

/// Full-width digits (U+FF10..U+FF19) become their ASCII counterparts.
fn ascii_digits(token: &str) -> String {
    token
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from_digit(c as u32 - '０' as u32, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}
