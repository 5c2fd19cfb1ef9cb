//! healthlog main entrypoint.

use healthlog::run;

fn main() {
    if let Err(e) = run() {
        healthlog::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
