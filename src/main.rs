//! tablepos main entrypoint.

use tablepos::run;
use tablepos::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
