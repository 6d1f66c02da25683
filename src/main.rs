//! camplog main entrypoint.

use camplog::run;
use camplog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
