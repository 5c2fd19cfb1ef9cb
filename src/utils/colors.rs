/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Green for a populated store, yellow when empty, grey when missing.
pub fn color_for_state(exists: bool, populated: bool) -> &'static str {
    match (exists, populated) {
        (true, true) => GREEN,
        (true, false) => YELLOW,
        _ => GREY,
    }
}

/// Greys out zero quantities in tables.
pub fn colorize_quantity(value: f64, text: &str) -> String {
    if value == 0.0 {
        format!("{GREY}{text}{RESET}")
    } else {
        text.to_string()
    }
}
