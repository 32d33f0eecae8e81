//! Folding sequences of semigroup and monoid values
//!
//! Every fold here processes elements in their given order. Sequential folds
//! also group left to right. The parallel variants regroup elements but never
//! reorder them, which associativity makes unobservable.

use crate::monoid::Monoid;
use crate::semigroup::Semigroup;
use rayon::prelude::*;
use tracing::trace;

/// Fold `items` left to right, starting from `seed`.
///
/// Returns `seed` unchanged for an empty sequence.
///
/// ```
/// use monoidal::fold_with_seed;
///
/// assert_eq!(fold_with_seed(vec![1, 2, 3], 0), 6);
/// ```
pub fn fold_with_seed<I, S>(items: I, seed: S) -> S
where
    I: IntoIterator<Item = S>,
    S: Semigroup,
{
    let mut count = 0usize;
    let result = items.into_iter().fold(seed, |acc, item| {
        count += 1;
        acc.combine(item)
    });
    trace!("Folded {} values onto seed", count);
    result
}

/// Fold `items` left to right, starting from the identity element.
///
/// Returns `M::empty()` for an empty sequence.
///
/// ```
/// use monoidal::fold_identity;
///
/// assert!(!fold_identity(vec![true, true, false]));
/// assert!(fold_identity(Vec::<bool>::new()));
/// ```
pub fn fold_identity<I, M>(items: I) -> M
where
    I: IntoIterator<Item = M>,
    M: Monoid,
{
    fold_with_seed(items, M::empty())
}

/// Combine a non-empty sequence without a seed.
///
/// Returns `None` when `items` is empty.
pub fn reduce<I, S>(items: I) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: Semigroup,
{
    items.into_iter().reduce(Semigroup::combine)
}

/// Combine `n` copies of `value`. `n == 0` yields the identity.
///
/// Uses repeated squaring, so only `O(log n)` combinations are performed.
pub fn combine_n<M>(value: M, n: usize) -> M
where
    M: Monoid + Clone,
{
    let mut result = M::empty();
    let mut base = value;
    let mut remaining = n;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.combine(base.clone());
        }
        remaining >>= 1;
        if remaining > 0 {
            base = base.clone().combine(base);
        }
    }

    result
}

/// Fold a vector of monoid values in parallel using rayon.
///
/// Equivalent to [`fold_identity`] for any lawful monoid. Worthwhile only for
/// large inputs; below a few thousand cheap elements the sequential fold is
/// faster.
///
/// ```
/// use monoidal::{par_fold_identity, Sum};
///
/// let values: Vec<_> = (1..=10_000u64).map(Sum).collect();
/// assert_eq!(par_fold_identity(values), Sum(50_005_000));
/// ```
pub fn par_fold_identity<M>(items: Vec<M>) -> M
where
    M: Monoid + Send,
{
    trace!("Folding {} values in parallel", items.len());
    items.into_par_iter().reduce(M::empty, Semigroup::combine)
}

/// Combine a vector of semigroup values in parallel.
///
/// Returns `None` for an empty vector.
pub fn par_reduce<S>(items: Vec<S>) -> Option<S>
where
    S: Semigroup + Send,
{
    trace!("Reducing {} values in parallel", items.len());
    items.into_par_iter().reduce_with(Semigroup::combine)
}

/// Iterator adaptor exposing the folds as methods.
pub trait CombineExt: Iterator + Sized {
    /// [`fold_identity`] over this iterator.
    fn combine_all(self) -> Self::Item
    where
        Self::Item: Monoid,
    {
        fold_identity(self)
    }

    /// [`fold_with_seed`] over this iterator.
    fn combine_from(self, seed: Self::Item) -> Self::Item
    where
        Self::Item: Semigroup,
    {
        fold_with_seed(self, seed)
    }

    /// [`reduce`] over this iterator.
    fn combine_reduce(self) -> Option<Self::Item>
    where
        Self::Item: Semigroup,
    {
        reduce(self)
    }
}

impl<I: Iterator> CombineExt for I {}
