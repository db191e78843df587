//! Local extrema scan over one dataset.

use crate::dataset::Dataset;
use crate::error::ExtremaError;
use crate::extrema::Extrema;

/// Single pass over `dataset`, seeded with its first element.
///
/// Returns `EmptyDataset` instead of a sentinel pair for empty input.
pub fn scan(dataset: &Dataset) -> Result<Extrema, ExtremaError> {
    scan_values(dataset.values()).ok_or_else(|| ExtremaError::empty_dataset(dataset.name()))
}

fn scan_values(values: &[i32]) -> Option<Extrema> {
    let (&first, rest) = values.split_first()?;

    let mut extrema = Extrema::of(first);
    for &value in rest {
        if value > extrema.max {
            extrema.max = value;
        }
        if value < extrema.min {
            extrema.min = value;
        }
    }
    Some(extrema)
}
