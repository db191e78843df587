//! Shared-memory model: scoped threads borrow their dataset and fold their
//! local pair into one accumulator inside a critical section.

use std::sync::Mutex;
use std::thread;

use tracing::trace;

use super::{resolve, scan_slot, Strategy, StrategyOutcome, WorkerBody};
use crate::assignment::Assignment;
use crate::dataset::Dataset;
use crate::error::ExtremaError;
use crate::extrema::{Extrema, LocalExtrema};

pub fn execute(
    datasets: &[Dataset],
    assignment: &Assignment,
) -> Result<StrategyOutcome, ExtremaError> {
    execute_with(datasets, assignment, scan_slot)
}

pub(crate) fn execute_with(
    datasets: &[Dataset],
    assignment: &Assignment,
    body: WorkerBody,
) -> Result<StrategyOutcome, ExtremaError> {
    let label = Strategy::SharedMemory.worker_label();
    let accumulator = Mutex::new(Extrema::IDENTITY);

    // Leaving the scope joins every thread before the accumulator is read.
    let results: Vec<Result<LocalExtrema, ExtremaError>> = thread::scope(|s| {
        let handles: Vec<_> = resolve(datasets, assignment)
            .into_iter()
            .map(|(slot, dataset)| {
                let accumulator = &accumulator;
                let handle = s.spawn(move || -> Result<LocalExtrema, ExtremaError> {
                    let local = body(label, slot, dataset)?;
                    fold_into(accumulator, slot, local.extrema)?;
                    Ok(local)
                });
                (slot, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(slot, handle)| {
                handle
                    .join()
                    .unwrap_or(Err(ExtremaError::WorkerPanicked { slot }))
            })
            .collect()
    });

    let locals = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    let combined = accumulator
        .into_inner()
        .map_err(|_| ExtremaError::LockPoisoned)?;

    Ok(StrategyOutcome { locals, combined })
}

/// Critical section. Two fields are updated together, so the whole
/// read-modify-write stays under the lock.
fn fold_into(
    accumulator: &Mutex<Extrema>,
    slot: usize,
    local: Extrema,
) -> Result<(), ExtremaError> {
    let mut global = accumulator.lock().map_err(|_| ExtremaError::LockPoisoned)?;
    *global = global.combine(local);
    trace!(slot, max = global.max, min = global.min, "updated shared accumulator");
    Ok(())
}
