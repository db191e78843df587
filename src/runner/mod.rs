//! Coordinator: pre-flight checks, strategy dispatch, and the final reduction.
//!
//! Every strategy returns the per-slot results in slot order together with the
//! combined pair it computed. The coordinator turns that pair into a
//! [`GlobalExtrema`] only after all workers have finished.

pub mod message_passing;
pub mod shared_memory;
pub mod work_stealing;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::assignment::Assignment;
use crate::config::RunConfig;
use crate::dataset::{total_elements, Dataset};
use crate::error::ExtremaError;
use crate::extrema::{Extrema, GlobalExtrema, LocalExtrema};
use crate::reduce;
use crate::scan::scan;

/// Execution model used to run the workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Scoped threads folding into a mutex-guarded accumulator.
    #[default]
    SharedMemory,
    /// Rank threads sending their results to the root over a channel.
    MessagePassing,
    /// Rayon pool with a tree-shaped reduce.
    WorkStealing,
}

impl Strategy {
    pub fn title(&self) -> &'static str {
        match self {
            Strategy::SharedMemory => "SHARED MEMORY PROCESSING",
            Strategy::MessagePassing => "MESSAGE PASSING PROCESSING",
            Strategy::WorkStealing => "WORK STEALING PROCESSING",
        }
    }

    /// What a single worker is called in log lines.
    pub fn worker_label(&self) -> &'static str {
        match self {
            Strategy::SharedMemory => "Thread",
            Strategy::MessagePassing => "Process",
            Strategy::WorkStealing => "Task",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::SharedMemory => "shared-memory",
            Strategy::MessagePassing => "message-passing",
            Strategy::WorkStealing => "work-stealing",
        };
        f.write_str(name)
    }
}

/// What a strategy hands back to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOutcome {
    pub locals: Vec<LocalExtrema>,
    pub combined: Extrema,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub strategy: Strategy,
    pub workers: usize,
    pub total_elements: usize,
    pub locals: Vec<LocalExtrema>,
    pub global: GlobalExtrema,
    /// Names of datasets no worker was assigned to.
    pub unprocessed: Vec<String>,
}

/// Validate, assign, run, and reduce.
pub fn run(config: &RunConfig) -> Result<RunReport, ExtremaError> {
    run_with(config, |_| {})
}

/// Like [`run`], calling `on_start` once the configuration is known to be
/// valid and before any pre-flight check or worker runs.
pub fn run_with<F>(config: &RunConfig, on_start: F) -> Result<RunReport, ExtremaError>
where
    F: FnOnce(&RunConfig),
{
    config.validate().map_err(ExtremaError::InvalidConfig)?;
    on_start(config);

    let assignment = Assignment::new(config.workers, config.datasets.len());
    let unprocessed = preflight(&config.datasets, &assignment, config.strict)?;

    info!(
        strategy = %config.strategy,
        workers = assignment.worker_count(),
        datasets = config.datasets.len(),
        "starting run"
    );

    let outcome = execute(config.strategy, &config.datasets, &assignment)?;
    debug!(combined = ?outcome.combined, "all workers finished");

    let global = reduce::finish(outcome.combined, assignment.worker_count())?;

    Ok(RunReport {
        strategy: config.strategy,
        workers: assignment.worker_count(),
        total_elements: total_elements(&config.datasets),
        locals: outcome.locals,
        global,
        unprocessed,
    })
}

/// Dispatch to one strategy without any pre-flight checks.
pub fn execute(
    strategy: Strategy,
    datasets: &[Dataset],
    assignment: &Assignment,
) -> Result<StrategyOutcome, ExtremaError> {
    match strategy {
        Strategy::SharedMemory => shared_memory::execute(datasets, assignment),
        Strategy::MessagePassing => message_passing::execute(datasets, assignment),
        Strategy::WorkStealing => work_stealing::execute(datasets, assignment),
    }
}

/// Checks done by the coordinator before any worker starts.
///
/// Fails on an assigned empty dataset and on a table with no assigned slot.
/// Datasets without a worker are a warning, or an error when `strict` is set.
/// Returns the names of those unprocessed datasets.
pub fn preflight(
    datasets: &[Dataset],
    assignment: &Assignment,
    strict: bool,
) -> Result<Vec<String>, ExtremaError> {
    if assignment.is_all_idle() {
        return Err(ExtremaError::AllWorkersIdle {
            workers: assignment.worker_count(),
        });
    }

    for (_, index) in assignment.slots() {
        if let Some(dataset) = index.and_then(|index| datasets.get(index)) {
            if dataset.is_empty() {
                return Err(ExtremaError::empty_dataset(dataset.name()));
            }
        }
    }

    let unprocessed: Vec<String> = assignment
        .unprocessed_datasets()
        .into_iter()
        .filter_map(|index| datasets.get(index))
        .map(|dataset| dataset.name().to_string())
        .collect();

    if !unprocessed.is_empty() {
        if strict {
            return Err(ExtremaError::InsufficientWorkers {
                workers: assignment.worker_count(),
                datasets: datasets.len(),
            });
        }
        for name in &unprocessed {
            warn!(
                workers = assignment.worker_count(),
                "insufficient workers: {name} will not be processed"
            );
        }
    }

    Ok(unprocessed)
}

/// Resolve the table into borrowed datasets, in slot order.
fn resolve<'a>(
    datasets: &'a [Dataset],
    assignment: &Assignment,
) -> Vec<(usize, Option<&'a Dataset>)> {
    assignment
        .slots()
        .map(|(slot, index)| (slot, index.and_then(|index| datasets.get(index))))
        .collect()
}

/// Signature of the body each worker runs. A plain `fn` so it can be
/// copied into scoped and detached threads alike.
pub(crate) type WorkerBody =
    fn(&str, usize, Option<&Dataset>) -> Result<LocalExtrema, ExtremaError>;

/// The body every worker runs, whatever the execution model.
fn scan_slot(
    label: &str,
    slot: usize,
    dataset: Option<&Dataset>,
) -> Result<LocalExtrema, ExtremaError> {
    let Some(dataset) = dataset else {
        info!("{label} {slot}: No dataset assigned");
        return Ok(LocalExtrema::idle(slot));
    };

    info!("{label} {slot}: Processing {}", dataset.name());
    let extrema = scan(dataset)?;
    info!(
        "{label} {slot}: Local Max = {}, Local Min = {}",
        extrema.max, extrema.min
    );

    Ok(LocalExtrema::processed(slot, dataset.name(), extrema))
}
