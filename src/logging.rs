//! Logging setup for the binaries.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing. `RUST_LOG` overrides the verbosity-derived level.
pub fn init_logging(verbose: u8, ansi: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_thread_names(verbose >= 3)
        .with_thread_ids(verbose >= 3)
        .try_init();

    // A subscriber may already be installed, e.g. by a test harness.
    if initialized.is_ok() {
        debug!("maxmin started with verbosity level: {}", verbose);
        trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    }
}
