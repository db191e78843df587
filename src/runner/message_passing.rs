//! Message-passing model.
//!
//! Every rank gets its own copy of its dataset, scans it, and sends one
//! [`RankMessage`] to the root over a channel. The root is the calling thread:
//! it gathers a message from every rank and only then reduces them in
//! sequence. No state is shared between ranks.

use std::thread;

use crossbeam::channel::{unbounded, Receiver, Sender};
use tracing::{debug, warn};

use super::{resolve, scan_slot, Strategy, StrategyOutcome, WorkerBody};
use crate::assignment::Assignment;
use crate::dataset::Dataset;
use crate::error::ExtremaError;
use crate::extrema::LocalExtrema;
use crate::reduce::reduce_local;

/// One rank's contribution, sent to the root.
#[derive(Debug)]
pub struct RankMessage {
    pub rank: usize,
    pub result: Result<LocalExtrema, ExtremaError>,
}

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
    let (tx, rx) = unbounded::<RankMessage>();

    let handles: Vec<_> = resolve(datasets, assignment)
        .into_iter()
        .map(|(rank, dataset)| {
            let owned = dataset.cloned();
            let tx = tx.clone();
            thread::spawn(move || run_rank(rank, owned, tx, body))
        })
        .collect();

    // The gather below ends once every rank has dropped its sender.
    drop(tx);
    let gathered = gather(&rx, assignment.worker_count());

    for (rank, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() {
            warn!(rank, "rank panicked");
        }
    }

    let locals = gathered.into_iter().collect::<Result<Vec<_>, _>>()?;
    let combined = reduce_local(locals.iter().map(|local| local.extrema));
    Ok(StrategyOutcome { locals, combined })
}

/// Drain the channel into rank order. A rank that never sent a message,
/// whether it panicked or just exited, counts as `WorkerPanicked`.
fn gather(
    rx: &Receiver<RankMessage>,
    ranks: usize,
) -> Vec<Result<LocalExtrema, ExtremaError>> {
    let mut gathered: Vec<Option<Result<LocalExtrema, ExtremaError>>> =
        (0..ranks).map(|_| None).collect();
    for message in rx {
        debug!(rank = message.rank, "root received local result");
        if let Some(entry) = gathered.get_mut(message.rank) {
            *entry = Some(message.result);
        }
    }

    gathered
        .into_iter()
        .enumerate()
        .map(|(rank, entry)| entry.unwrap_or(Err(ExtremaError::WorkerPanicked { slot: rank })))
        .collect()
}

fn run_rank(rank: usize, dataset: Option<Dataset>, tx: Sender<RankMessage>, body: WorkerBody) {
    let label = Strategy::MessagePassing.worker_label();
    let result = body(label, rank, dataset.as_ref());

    if tx.send(RankMessage { rank, result }).is_err() {
        warn!(rank, "root stopped listening before the result was sent");
    }
}
