//! Labeled integer datasets handed to workers.

use serde::{Deserialize, Serialize};

/// An immutable, named sequence of integers.
///
/// The name is only used for logging and reporting. An empty dataset can be
/// constructed (for example from a config file), but scanning it fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    name: String,
    values: Vec<i32>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, values: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

const REFERENCE_DATASET_1: [i32; 10] = [45, 67, 23, 89, 56, 78, 34, 91, 42, 73];
const REFERENCE_DATASET_2: [i32; 10] = [38, 92, 15, 64, 87, 29, 76, 53, 81, 47];
const REFERENCE_DATASET_3: [i32; 10] = [52, 31, 88, 19, 74, 96, 41, 63, 27, 85];

/// The three compiled-in datasets used when no configuration supplies any.
pub fn reference_datasets() -> Vec<Dataset> {
    vec![
        Dataset::new("Dataset 1", REFERENCE_DATASET_1.to_vec()),
        Dataset::new("Dataset 2", REFERENCE_DATASET_2.to_vec()),
        Dataset::new("Dataset 3", REFERENCE_DATASET_3.to_vec()),
    ]
}

/// Total number of elements across all datasets.
pub fn total_elements(datasets: &[Dataset]) -> usize {
    datasets.iter().map(Dataset::len).sum()
}
