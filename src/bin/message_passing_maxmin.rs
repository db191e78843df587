//! Message-passing model: ranks send local results to a root.
//!
//! Run with: cargo run --bin message_passing_maxmin -- --workers 3

use std::process::ExitCode;

use maxmin::Strategy;

fn main() -> ExitCode {
    maxmin::cli::main_with(Some(Strategy::MessagePassing))
}
