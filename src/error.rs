use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can stop a run from producing a global result.
#[derive(Error, Debug)]
pub enum ExtremaError {
    #[error("dataset '{name}' is empty; cannot compute its extrema")]
    EmptyDataset { name: String },

    #[error("all {workers} worker(s) were idle; no dataset was processed, so there is no global result")]
    AllWorkersIdle { workers: usize },

    #[error("{workers} worker(s) cannot cover {datasets} datasets; {} dataset(s) would never be processed", uncovered(.datasets, .workers))]
    InsufficientWorkers { workers: usize, datasets: usize },

    #[error("worker {slot} panicked before reporting its result")]
    WorkerPanicked { slot: usize },

    #[error("shared accumulator lock was poisoned by a panicking worker")]
    LockPoisoned,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("invalid configuration ({} problem(s)):\n{}", .0.len(), format_config_errors(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ExtremaError {
    pub fn empty_dataset(name: impl Into<String>) -> Self {
        Self::EmptyDataset { name: name.into() }
    }
}

fn uncovered(datasets: &usize, workers: &usize) -> usize {
    datasets.saturating_sub(*workers)
}

fn format_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|err| format!("  - {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_display() {
        let err = ExtremaError::empty_dataset("Dataset 9");
        let display = err.to_string();
        assert!(display.contains("Dataset 9"));
        assert!(display.contains("empty"));
    }

    #[test]
    fn test_insufficient_workers_counts_dropped() {
        let err = ExtremaError::InsufficientWorkers {
            workers: 1,
            datasets: 3,
        };
        assert!(err.to_string().contains("2 dataset(s)"));
    }

    #[test]
    fn test_insufficient_workers_display_never_underflows() {
        let err = ExtremaError::InsufficientWorkers {
            workers: 5,
            datasets: 3,
        };
        assert!(err.to_string().contains("0 dataset(s)"));
    }

    #[test]
    fn test_invalid_config_lists_every_problem() {
        let err = ExtremaError::InvalidConfig(vec![
            ConfigError::invalid_value("datasets[1].name", "duplicate dataset name 'a'"),
            ConfigError::OutOfRange {
                field: "workers".to_string(),
                value: 0,
                min: 1,
                max: 256,
            },
        ]);
        let display = err.to_string();
        assert!(display.contains("2 problem(s)"));
        assert!(display.contains("'a'"));
        assert!(display.contains("workers"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<ExtremaError>();
        assert_sync::<ExtremaError>();
    }
}
