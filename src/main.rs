//! Binary entry point for `move-dep`.

use std::process;

fn main() {
    if let Err(e) = move_dep::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
