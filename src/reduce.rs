//! Combining per-worker extrema into the global pair.

use crate::error::ExtremaError;
use crate::extrema::{Extrema, GlobalExtrema, LocalExtrema};

/// Linear fold starting from the identity pair.
pub fn reduce_local<I>(locals: I) -> Extrema
where
    I: IntoIterator<Item = Extrema>,
{
    locals
        .into_iter()
        .fold(Extrema::IDENTITY, Extrema::combine)
}

/// Pairwise (tree-shaped) reduction. Gives the same answer as
/// [`reduce_local`] because `combine` is associative and commutative.
pub fn tree_reduce(locals: &[Extrema]) -> Extrema {
    match locals {
        [] => Extrema::IDENTITY,
        [single] => *single,
        _ => {
            let (left, right) = locals.split_at(locals.len() / 2);
            tree_reduce(left).combine(tree_reduce(right))
        }
    }
}

/// Reduce every slot's result and reject a run where nothing was processed.
pub fn reduce_global(locals: &[LocalExtrema]) -> Result<GlobalExtrema, ExtremaError> {
    let combined = reduce_local(locals.iter().map(|local| local.extrema));
    finish(combined, locals.len())
}

/// Turn a combined pair into the final answer.
pub fn finish(combined: Extrema, workers: usize) -> Result<GlobalExtrema, ExtremaError> {
    GlobalExtrema::from_extrema(combined).ok_or(ExtremaError::AllWorkersIdle { workers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::seq::SliceRandom;

    fn reference_locals() -> Vec<LocalExtrema> {
        vec![
            LocalExtrema::processed(0, "Dataset 1", Extrema { max: 91, min: 23 }),
            LocalExtrema::processed(1, "Dataset 2", Extrema { max: 92, min: 15 }),
            LocalExtrema::processed(2, "Dataset 3", Extrema { max: 96, min: 19 }),
            LocalExtrema::idle(3),
        ]
    }

    fn extrema_strategy() -> impl Strategy<Value = Extrema> {
        (any::<i32>(), any::<i32>()).prop_map(|(a, b)| Extrema {
            max: a.max(b),
            min: a.min(b),
        })
    }

    #[test]
    fn test_reference_global() {
        let global = reduce_global(&reference_locals()).unwrap();
        assert_eq!(global.max(), 96);
        assert_eq!(global.min(), 15);
        assert_eq!(global.range(), 81);
    }

    #[test]
    fn test_all_idle_is_an_error() {
        let locals: Vec<_> = (0..4).map(LocalExtrema::idle).collect();
        match reduce_global(&locals) {
            Err(ExtremaError::AllWorkersIdle { workers }) => assert_eq!(workers, 4),
            other => panic!("expected AllWorkersIdle, got {other:?}"),
        }
    }

    #[test]
    fn test_no_slots_is_an_error() {
        assert!(matches!(
            reduce_global(&[]),
            Err(ExtremaError::AllWorkersIdle { workers: 0 })
        ));
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let locals = reference_locals();
        assert_eq!(
            reduce_global(&locals).unwrap(),
            reduce_global(&locals).unwrap()
        );
    }

    #[test]
    fn test_shuffled_order_gives_same_result() {
        let mut rng = rand::thread_rng();
        let mut locals = reference_locals();
        let expected = reduce_global(&locals).unwrap();

        for _ in 0..20 {
            locals.shuffle(&mut rng);
            assert_eq!(reduce_global(&locals).unwrap(), expected);
        }
    }

    proptest! {
        #[test]
        fn prop_permutation_independent(pairs in prop::collection::vec(extrema_strategy(), 0..32)) {
            let forward = reduce_local(pairs.iter().copied());
            let backward = reduce_local(pairs.iter().rev().copied());
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn prop_identity_absorption(
            pairs in prop::collection::vec(extrema_strategy(), 1..16),
            idle in 0usize..16,
        ) {
            let base = reduce_local(pairs.iter().copied());
            let padded = reduce_local(
                pairs.iter().copied().chain(std::iter::repeat(Extrema::IDENTITY).take(idle)),
            );
            prop_assert_eq!(base, padded);
        }

        #[test]
        fn prop_tree_matches_fold(pairs in prop::collection::vec(extrema_strategy(), 0..64)) {
            prop_assert_eq!(tree_reduce(&pairs), reduce_local(pairs.iter().copied()));
        }

        #[test]
        fn prop_global_bounds_every_local(pairs in prop::collection::vec(extrema_strategy(), 1..16)) {
            let locals: Vec<_> = pairs
                .iter()
                .enumerate()
                .map(|(slot, &extrema)| LocalExtrema::processed(slot, format!("d{slot}"), extrema))
                .collect();
            let global = reduce_global(&locals).unwrap();
            for local in &locals {
                prop_assert!(global.max() >= local.extrema.max);
                prop_assert!(global.min() <= local.extrema.min);
            }
        }
    }
}
