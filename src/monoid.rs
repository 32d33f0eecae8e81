//! Monoid trait: a semigroup with an identity element

use crate::semigroup::Semigroup;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

/// A [`Semigroup`] with a distinguished identity element.
///
/// Implementations must satisfy `Self::empty().combine(a) == a` and
/// `a.combine(Self::empty()) == a` for every `a`.
pub trait Monoid: Semigroup {
    /// The identity element for [`Semigroup::combine`].
    fn empty() -> Self;
}

macro_rules! zero_monoid {
    ($($t:ty),* $(,)?) => {
        $(
            impl Monoid for $t {
                #[inline]
                fn empty() -> Self {
                    0
                }
            }
        )*
    };
}

zero_monoid!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Monoid for bool {
    #[inline]
    fn empty() -> Self {
        true
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<S: Semigroup> Monoid for Option<S> {
    fn empty() -> Self {
        None
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

impl<K: Eq + Hash, V: Semigroup> Monoid for HashMap<K, V> {
    fn empty() -> Self {
        HashMap::new()
    }
}

impl<K: Ord, V: Semigroup> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        BTreeMap::new()
    }
}

impl<T: Eq + Hash> Monoid for HashSet<T> {
    fn empty() -> Self {
        HashSet::new()
    }
}

impl<T: Ord> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        BTreeSet::new()
    }
}
