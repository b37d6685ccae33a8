// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{correlation::pearson, error::ErrorKind};
use std::{collections::HashMap, hash::Hash};

/// Scores of the movies both users rated, as `(reference score, other score)`,
/// in the order of `other`'s ratings.
///
/// If the reference user rated the same movie more than once, the last of
/// those ratings is the one paired. Repeated movies on the `other` side each
/// produce their own pair.
pub fn paired_ratings<I, S>(reference: &[(I, S)], other: &[(I, S)]) -> Vec<(f64, f64)>
where
    I: Hash + Eq,
    S: Copy + Into<f64>,
{
    let lookup: HashMap<&I, S> = reference.iter().map(|(id, score)| (id, *score)).collect();

    other
        .iter()
        .filter_map(|(id, score)| {
            lookup
                .get(id)
                .map(|ref_score| ((*ref_score).into(), (*score).into()))
        })
        .collect()
}

/// Similarity between two rating snapshots using the given statistic.
///
/// Returns exactly `0.0` when the users share no rated movie, without
/// calling `statistic`. Otherwise whatever the statistic returns is passed
/// through untouched, errors included.
pub fn similarity_with<I, S, F, E>(reference: &[(I, S)], other: &[(I, S)], statistic: F) -> Result<f64, E>
where
    I: Hash + Eq,
    S: Copy + Into<f64>,
    F: FnOnce(&[(f64, f64)]) -> Result<f64, E>,
{
    let pairs = paired_ratings(reference, other);

    if pairs.is_empty() {
        Ok(0.0)
    } else {
        statistic(&pairs)
    }
}

/// Pearson similarity between two rating snapshots, `0.0` without overlap
pub fn similarity<I, S>(reference: &[(I, S)], other: &[(I, S)]) -> Result<f64, ErrorKind>
where
    I: Hash + Eq,
    S: Copy + Into<f64>,
{
    similarity_with(reference, other, pearson::<f64>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::*;

    #[test]
    fn overlap_pairs_follow_other_order() {
        let a = vec![(1, 5), (2, 3), (3, 4)];
        let b = vec![(2, 3), (3, 5), (4, 1)];

        let mut seen = Vec::new();
        let result: Result<f64, ()> = similarity_with(&a, &b, |pairs| {
            seen.extend_from_slice(pairs);
            Ok(0.25)
        });

        assert_eq!(result, Ok(0.25));
        assert_eq!(seen, vec![(3., 3.), (4., 5.)]);
    }

    #[test]
    fn overlap_uses_pearson() {
        let a = vec![(1, 5), (2, 3), (3, 4)];
        let b = vec![(2, 3), (3, 5), (4, 1)];

        assert_approx_eq!(1., similarity(&a, &b).unwrap());
    }

    #[test]
    fn no_overlap_is_zero() {
        let a = vec![(1, 5)];
        let b = vec![(2, 5)];

        let result: Result<f64, ()> = similarity_with(&a, &b, |_| Err(()));
        assert_eq!(result, Ok(0.0));
        assert_eq!(similarity(&a, &b), Ok(0.0));
    }

    #[test]
    fn reference_without_ratings_is_zero() {
        let a: Vec<(u32, i32)> = vec![];
        let b = vec![(1, 4), (2, 2), (3, 5)];

        assert_eq!(similarity(&a, &b), Ok(0.0));
        assert_eq!(similarity(&a, &a), Ok(0.0));
    }

    #[test]
    fn self_similarity_is_one() {
        let a = vec![(1, 5), (2, 3), (3, 4), (7, 1)];
        assert_approx_eq!(1., similarity(&a, &a).unwrap());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = vec![(1, 5), (2, 1), (3, 4), (4, 2)];
        let b = vec![(4, 1), (3, 5), (2, 2), (1, 4)];

        let first = similarity(&a, &b).unwrap();
        let second = similarity(&a, &b).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn swapping_users_is_symmetric() {
        let a = vec![(1, 5), (2, 1), (3, 4), (4, 2), (9, 3)];
        let b = vec![(4, 1), (3, 5), (2, 2), (1, 4), (8, 2)];

        assert_approx_eq!(similarity(&a, &b).unwrap(), similarity(&b, &a).unwrap());
    }

    #[test]
    fn repeated_reference_movie_last_one_wins() {
        let a = vec![(1, 5), (2, 3), (1, 2)];
        let b = vec![(1, 4), (2, 3)];

        assert_eq!(paired_ratings(&a, &b), vec![(2., 4.), (3., 3.)]);
    }

    #[test]
    fn repeated_movies_break_symmetry() {
        let a = vec![(1, 5), (1, 1), (2, 4)];
        let b = vec![(1, 3), (2, 2)];

        assert_eq!(paired_ratings(&a, &b), vec![(1., 3.), (4., 2.)]);
        assert_eq!(paired_ratings(&b, &a), vec![(3., 5.), (3., 1.), (2., 4.)]);
    }

    #[test]
    fn zero_variance_propagates() {
        let a = vec![(1, 3), (2, 3)];
        let b = vec![(1, 1), (2, 5)];

        assert_eq!(similarity(&a, &b), Err(ErrorKind::IndeterminateForm));
    }
}
