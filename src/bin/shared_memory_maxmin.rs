//! Shared-memory model: threads and a critical section.
//!
//! Run with: cargo run --bin shared_memory_maxmin -- --workers 4

use std::process::ExitCode;

use maxmin::Strategy;

fn main() -> ExitCode {
    maxmin::cli::main_with(Some(Strategy::SharedMemory))
}
