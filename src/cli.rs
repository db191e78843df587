//! Command-line surface shared by the binaries.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::config::RunConfig;
use crate::error::ExtremaError;
use crate::logging::init_logging;
use crate::report;
use crate::runner::{self, RunReport, Strategy};

#[derive(Parser, Debug, Clone, Default)]
#[command(version, about = "Parallel max/min over fixed integer datasets")]
pub struct Cli {
    /// Number of workers (threads, ranks, or pool threads)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Execution model; ignored by the single-model binaries
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// TOML or JSON run configuration
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fail when some datasets would not get a worker
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v debug, -vv trace, -vvv thread ids)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags.
    pub fn resolve_config(&self, fixed: Option<Strategy>) -> Result<RunConfig, ExtremaError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(strategy) = fixed.or(self.strategy) {
            config.strategy = strategy;
        }
        if self.strict {
            config.strict = true;
        }

        Ok(config)
    }
}

/// Entry point for every binary. `fixed` pins the execution model.
pub fn main_with(fixed: Option<Strategy>) -> ExitCode {
    let cli = Cli::parse();
    let color = report::configure_colors(cli.no_color);
    init_logging(cli.verbose, color);

    match execute(&cli, fixed) {
        Ok(report) => {
            print!("{}", report::results(&report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", report::failure(&err));
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli, fixed: Option<Strategy>) -> Result<RunReport, ExtremaError> {
    let config = cli.resolve_config(fixed)?;
    debug!(?config, "resolved configuration");

    runner::run_with(&config, |config| {
        print!(
            "{}",
            report::banner(
                config.strategy,
                config.workers,
                crate::dataset::total_elements(&config.datasets),
                config.datasets.len(),
            )
        );
        println!();
    })
}
