//! Endomorphisms: same-type transformations composed by sequential application

use crate::monoid::Monoid;
use crate::semigroup::Semigroup;
use std::fmt;
use std::sync::Arc;

/// A wrapped function `T -> T`.
///
/// Combining `f` with `g` yields an endomorphism applying `f` first and
/// then `g`. Composition is associative but not commutative. The identity
/// endomorphism returns its input unchanged.
///
/// Composed functions are kept as a flat list of steps run in a loop, so
/// arbitrarily long pipelines neither recurse on `apply` nor on drop. Each
/// step is held behind an [`Arc`]; cloning an `Endo` never duplicates
/// captured state.
///
/// ```
/// use monoidal::{Endo, Semigroup};
///
/// let inc = Endo::new(|x: i64| x + 1);
/// let square = Endo::new(|x: i64| x * x);
///
/// assert_eq!(inc.clone().combine(square.clone()).apply(3), 16);
/// assert_eq!(square.combine(inc).apply(3), 10);
/// ```
pub struct Endo<T> {
    steps: Arc<Vec<Step<T>>>,
}

type Step<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

impl<T: 'static> Endo<T> {
    /// Wrap a transformation. Never fails.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        let step: Step<T> = Arc::new(func);
        Self {
            steps: Arc::new(vec![step]),
        }
    }

    /// The endomorphism that returns its argument unchanged.
    pub fn identity() -> Self {
        Self {
            steps: Arc::new(Vec::new()),
        }
    }

    /// Apply `self`, then `next`. Same as [`Semigroup::combine`].
    pub fn and_then(self, next: Self) -> Self {
        self.combine(next)
    }

    /// Apply `inner` first, then `self` (mathematical `self ∘ inner`).
    pub fn compose(self, inner: Self) -> Self {
        inner.combine(self)
    }
}

impl<T> Endo<T> {
    /// Invoke the wrapped functions in order. Panics raised by a function
    /// propagate to the caller untouched.
    pub fn apply(&self, value: T) -> T {
        self.steps.iter().fold(value, |acc, step| step(acc))
    }

    /// Number of composed functions. The identity has none.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<T> Clone for Endo<T> {
    fn clone(&self) -> Self {
        Self {
            steps: Arc::clone(&self.steps),
        }
    }
}

impl<T> fmt::Debug for Endo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endo")
            .field("type", &std::any::type_name::<T>())
            .field("steps", &self.steps.len())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Semigroup for Endo<T> {
    fn combine(self, other: Self) -> Self {
        if other.steps.is_empty() {
            return self;
        }
        let mut steps = self.steps;
        // Copies the list only when it is shared with another clone.
        Arc::make_mut(&mut steps).extend(other.steps.iter().cloned());
        Self { steps }
    }
}

impl<T: 'static> Monoid for Endo<T> {
    fn empty() -> Self {
        Self::identity()
    }
}
