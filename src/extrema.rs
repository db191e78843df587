// =============================================================================
// Extrema pairs and their reduction identity
// =============================================================================

use std::fmt;

use serde::Serialize;

/// A `(max, min)` pair.
///
/// `IDENTITY` is `(i32::MIN, i32::MAX)`: combining it with any pair leaves
/// that pair unchanged. A pair produced by scanning real data always has
/// `max >= min`, so `max < min` only happens for the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Extrema {
    pub max: i32,
    pub min: i32,
}

impl Extrema {
    pub const IDENTITY: Extrema = Extrema {
        max: i32::MIN,
        min: i32::MAX,
    };

    /// Pair for a single observed value.
    pub fn of(value: i32) -> Self {
        Self {
            max: value,
            min: value,
        }
    }

    /// Associative, commutative combine of both channels.
    pub fn combine(self, other: Extrema) -> Extrema {
        Extrema {
            max: self.max.max(other.max),
            min: self.min.min(other.min),
        }
    }

    /// True when no real value has been folded in.
    pub fn is_identity(&self) -> bool {
        self.max < self.min
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Result of one worker slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalExtrema {
    pub slot: usize,
    /// `None` for an idle slot.
    pub dataset: Option<String>,
    pub extrema: Extrema,
}

impl LocalExtrema {
    pub fn processed(slot: usize, dataset: impl Into<String>, extrema: Extrema) -> Self {
        Self {
            slot,
            dataset: Some(dataset.into()),
            extrema,
        }
    }

    pub fn idle(slot: usize) -> Self {
        Self {
            slot,
            dataset: None,
            extrema: Extrema::IDENTITY,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.dataset.is_none()
    }
}

/// Final answer of a run. Only built from a non-identity reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlobalExtrema {
    max: i32,
    min: i32,
}

impl GlobalExtrema {
    /// `None` if `extrema` is still the identity pair.
    pub fn from_extrema(extrema: Extrema) -> Option<Self> {
        if extrema.is_identity() {
            None
        } else {
            Some(Self {
                max: extrema.max,
                min: extrema.min,
            })
        }
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    /// `max - min`, widened so `i32::MAX - i32::MIN` does not overflow.
    pub fn range(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }
}

impl fmt::Display for GlobalExtrema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "max {}, min {}, range {}", self.max, self.min, self.range())
    }
}
