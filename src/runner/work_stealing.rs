//! Work-stealing model on a rayon pool sized to the worker count.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::{resolve, scan_slot, Strategy, StrategyOutcome};
use crate::assignment::Assignment;
use crate::dataset::Dataset;
use crate::error::ExtremaError;
use crate::extrema::{Extrema, LocalExtrema};

pub fn execute(
    datasets: &[Dataset],
    assignment: &Assignment,
) -> Result<StrategyOutcome, ExtremaError> {
    let label = Strategy::WorkStealing.worker_label();
    let pool = ThreadPoolBuilder::new()
        .num_threads(assignment.worker_count())
        .thread_name(|index| format!("maxmin-worker-{index}"))
        .build()?;

    let slots = resolve(datasets, assignment);

    pool.install(|| -> Result<StrategyOutcome, ExtremaError> {
        let locals = slots
            .par_iter()
            .map(|&(slot, dataset)| scan_slot(label, slot, dataset))
            .collect::<Result<Vec<LocalExtrema>, _>>()?;

        // Combination order is up to rayon's splitting.
        let combined = locals
            .par_iter()
            .map(|local| local.extrema)
            .reduce(|| Extrema::IDENTITY, Extrema::combine);

        Ok(StrategyOutcome { locals, combined })
    })
}
