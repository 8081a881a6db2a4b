//! rPonto main entrypoint.

use rponto::run;
use rponto::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
