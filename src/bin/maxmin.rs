//! Runs any execution model, chosen with `--strategy`.
//!
//! Run with: cargo run --bin maxmin -- --strategy work-stealing

use std::process::ExitCode;

fn main() -> ExitCode {
    maxmin::cli::main_with(None)
}
