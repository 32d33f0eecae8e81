//! Newtype wrappers selecting an operation for a carrier type
//!
//! A carrier such as `i64` admits several lawful monoids (addition,
//! multiplication, max, min). The bare type uses addition; these wrappers
//! pick the others explicitly.
//!
//! Every wrapper with an identity element implements `Default` as that
//! identity. `First` and `Last` have none and no `Default`.

use crate::monoid::Monoid;
use crate::semigroup::Semigroup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integers under wrapping addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sum<T>(pub T);

/// Integers under wrapping multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product<T>(pub T);

/// Booleans under logical AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct All(pub bool);

/// Booleans under logical OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Any(pub bool);

/// Keeps the larger operand. On ties the left operand wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Max<T>(pub T);

/// Keeps the smaller operand. On ties the left operand wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Min<T>(pub T);

/// Keeps the left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct First<T>(pub T);

/// Keeps the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Last<T>(pub T);

macro_rules! identity_default {
    ($($t:ty),* $(,)?) => {
        $(
            impl Default for $t {
                fn default() -> Self {
                    <$t as Monoid>::empty()
                }
            }
        )*
    };
}

macro_rules! integer_wrappers {
    ($($t:ty),* $(,)?) => {
        $(
            impl Semigroup for Sum<$t> {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    Sum(self.0.wrapping_add(other.0))
                }
            }

            impl Monoid for Sum<$t> {
                #[inline]
                fn empty() -> Self {
                    Sum(0)
                }
            }

            impl Semigroup for Product<$t> {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    Product(self.0.wrapping_mul(other.0))
                }
            }

            impl Monoid for Product<$t> {
                #[inline]
                fn empty() -> Self {
                    Product(1)
                }
            }

            impl Monoid for Max<$t> {
                #[inline]
                fn empty() -> Self {
                    Max(<$t>::MIN)
                }
            }

            impl Monoid for Min<$t> {
                #[inline]
                fn empty() -> Self {
                    Min(<$t>::MAX)
                }
            }

            identity_default!(Sum<$t>, Product<$t>, Max<$t>, Min<$t>);
        )*
    };
}

integer_wrappers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Semigroup for All {
    #[inline]
    fn combine(self, other: Self) -> Self {
        All(self.0 && other.0)
    }
}

impl Monoid for All {
    #[inline]
    fn empty() -> Self {
        All(true)
    }
}

impl Semigroup for Any {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Any(self.0 || other.0)
    }
}

impl Monoid for Any {
    #[inline]
    fn empty() -> Self {
        Any(false)
    }
}

impl<T: Ord> Semigroup for Max<T> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

impl<T: Ord> Semigroup for Min<T> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }
}

impl<T> Semigroup for First<T> {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

impl<T> Semigroup for Last<T> {
    fn combine(self, other: Self) -> Self {
        other
    }
}

identity_default!(All, Any);

macro_rules! display_wrapper {
    ($($name:ident),*) => {
        $(
            impl<T: fmt::Display> fmt::Display for $name<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }
        )*
    };
}

display_wrapper!(Sum, Product, Max, Min, First, Last);

impl fmt::Display for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
