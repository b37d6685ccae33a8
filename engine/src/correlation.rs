// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::error::ErrorKind;
use num_traits::float::Float;
use std::ops::{AddAssign, Mul, Sub};

/// Pearson product-moment correlation of paired observations.
///
/// Fails with `EmptyRatings` when there is nothing to correlate, and with
/// `IndeterminateForm`/`DivisionByZero` when one of the sides has no
/// variance. Swapping the members of every pair yields the same value.
/// Rounding never pushes the result outside `[-1, 1]`.
pub fn pearson<V>(pairs: &[(V, V)]) -> Result<V, ErrorKind>
where
    V: Float + AddAssign + Sub + Mul,
{
    let mut mean_x = None;
    let mut mean_y = None;

    for (x, y) in pairs {
        *mean_x.get_or_insert_with(V::zero) += *x;
        *mean_y.get_or_insert_with(V::zero) += *y;
    }

    let n = V::from(pairs.len()).ok_or(ErrorKind::ConvertType)?;
    let mean_x = mean_x.ok_or(ErrorKind::EmptyRatings)? / n;
    let mean_y = mean_y.ok_or(ErrorKind::EmptyRatings)? / n;

    let mut cov = V::zero();
    let mut std_dev_x = V::zero();
    let mut std_dev_y = V::zero();

    for (x, y) in pairs {
        cov += (*x - mean_x) * (*y - mean_y);
        std_dev_x += (*x - mean_x).powi(2);
        std_dev_y += (*y - mean_y).powi(2);
    }

    let pearson = cov / (std_dev_x.sqrt() * std_dev_y.sqrt());
    if pearson.is_nan() {
        Err(ErrorKind::IndeterminateForm)
    } else if pearson.is_infinite() {
        Err(ErrorKind::DivisionByZero)
    } else {
        Ok(pearson.max(-V::one()).min(V::one()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::*;

    #[test]
    fn perfect_positive_correlation() {
        let pairs = [(1., 2.), (2., 4.), (3., 6.)];
        assert_approx_eq!(1., pearson(&pairs).unwrap());
    }

    #[test]
    fn perfect_negative_correlation() {
        let pairs = [(1., 5.), (2., 4.), (3., 3.), (4., 2.)];
        assert_approx_eq!(-1., pearson(&pairs).unwrap());
    }

    #[test]
    fn known_value() {
        let pairs = [(1., 2.), (2., 1.), (3., 4.), (4., 3.)];
        assert_approx_eq!(0.6, pearson(&pairs).unwrap());
    }

    #[test]
    fn stays_within_bounds() {
        let pairs = [(5., 4.), (2., 1.)];
        assert_eq!(pearson(&pairs), Ok(1.));

        let pairs = [(5., 1.), (2., 4.)];
        assert_eq!(pearson(&pairs), Ok(-1.));
    }

    #[test]
    fn swapping_pairs_is_symmetric() {
        let pairs = [(5., 1.), (3., 2.), (4., 4.), (1., 2.)];
        let swapped: Vec<_> = pairs.iter().map(|(x, y)| (*y, *x)).collect();

        assert_approx_eq!(pearson(&pairs).unwrap(), pearson(&swapped).unwrap());
    }

    #[test]
    fn empty_pairs_should_fail() {
        let pairs: [(f64, f64); 0] = [];
        assert_eq!(pearson(&pairs), Err(ErrorKind::EmptyRatings));
    }

    #[test]
    fn zero_variance_should_fail() {
        let pairs = [(3., 1.), (3., 5.)];
        assert_eq!(pearson(&pairs), Err(ErrorKind::IndeterminateForm));

        let single = [(4., 4.)];
        assert_eq!(pearson(&single), Err(ErrorKind::IndeterminateForm));
    }

    #[test]
    fn works_with_f32() {
        let pairs = [(1f32, 1f32), (2., 2.), (3., 3.)];
        assert_approx_eq!(1f32, pearson(&pairs).unwrap());
    }
}
