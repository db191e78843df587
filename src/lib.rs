//! Parallel max/min over fixed integer datasets.
//!
//! Datasets are assigned to workers by index, each worker scans its own data
//! for a local `(max, min)`, and the local pairs are reduced into one global
//! pair. The same contract is run under three execution models: a shared
//! accumulator behind a mutex, rank threads that message a root, and a rayon
//! pool.
//!
//! ```
//! use maxmin::{run, RunConfig, Strategy};
//!
//! let report = run(&RunConfig::default().with_strategy(Strategy::MessagePassing)).unwrap();
//! assert_eq!((report.global.max(), report.global.min()), (96, 15));
//! ```

pub mod assignment;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extrema;
pub mod logging;
pub mod reduce;
pub mod report;
pub mod runner;
pub mod scan;

pub use assignment::Assignment;
pub use config::{ConfigError, RunConfig};
pub use dataset::{reference_datasets, Dataset};
pub use error::ExtremaError;
pub use extrema::{Extrema, GlobalExtrema, LocalExtrema};
pub use reduce::{reduce_global, reduce_local, tree_reduce};
pub use runner::{run, run_with, RunReport, Strategy};
pub use scan::scan;
