//! Semigroup trait and its standard instances
//!
//! A semigroup is a type with an associative binary operation. Combining
//! never mutates either operand observably: both are taken by value and a
//! new value is returned.
//!
//! Integer instances use wrapping addition. Wrapping arithmetic is total and
//! associative for every input, while saturating addition on signed integers
//! is not. Use [`crate::wrappers::Product`] for multiplication.
//!
//! Floating-point numbers have no instance because IEEE addition is not
//! associative.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

/// A type with an associative `combine` operation.
///
/// Implementations must satisfy
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`.
/// The law is a contract, not something checked at runtime; see
/// [`crate::laws`] for helpers that verify it over samples.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`, `self` on the left.
    fn combine(self, other: Self) -> Self;
}

macro_rules! wrapping_add_semigroup {
    ($($t:ty),* $(,)?) => {
        $(
            impl Semigroup for $t {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )*
    };
}

wrapping_add_semigroup!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Booleans combine under logical AND.
impl Semigroup for bool {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self && other
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// `None` is neutral; two `Some` values combine their contents.
impl<S: Semigroup> Semigroup for Option<S> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

/// Key union; values under the same key are combined left then right.
impl<K: Eq + Hash, V: Semigroup> Semigroup for HashMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

impl<T: Eq + Hash> Semigroup for HashSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_combine_adds() {
        assert_eq!(5i32.combine(3), 8);
        assert_eq!(10u64.combine(0), 10);
    }

    #[test]
    fn test_integer_combine_wraps_on_overflow() {
        assert_eq!(i8::MAX.combine(1), i8::MIN);
        assert_eq!(u8::MAX.combine(2), 1);
    }

    #[test]
    fn test_signed_wrapping_is_associative_across_overflow() {
        let (a, b, c) = (127i8, 1i8, -1i8);
        assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }

    #[test]
    fn test_bool_combine_is_and() {
        assert!(true.combine(true));
        assert!(!true.combine(false));
        assert!(!false.combine(true));
    }

    #[test]
    fn test_string_combine_concatenates() {
        let result = "Hello, ".to_string().combine("World!".to_string());
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_vec_combine_preserves_order() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_option_none_is_neutral() {
        assert_eq!(Some(3).combine(None), Some(3));
        assert_eq!(None.combine(Some(4)), Some(4));
        assert_eq!(Some(3).combine(Some(4)), Some(7));
        assert_eq!(None::<i32>.combine(None), None);
    }

    #[test]
    fn test_tuple_combines_componentwise() {
        let a = (1, "a".to_string(), vec![1]);
        let b = (2, "b".to_string(), vec![2]);
        assert_eq!(a.combine(b), (3, "ab".to_string(), vec![1, 2]));
    }

    #[test]
    fn test_hashmap_combines_colliding_values() {
        let mut a = HashMap::new();
        a.insert("group1", vec![1]);
        a.insert("group2", vec![2]);

        let mut b = HashMap::new();
        b.insert("group1", vec![10]);
        b.insert("group3", vec![3]);

        let merged = a.combine(b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged["group1"], vec![1, 10]);
        assert_eq!(merged["group2"], vec![2]);
        assert_eq!(merged["group3"], vec![3]);
    }

    #[test]
    fn test_btreemap_combine_is_left_then_right() {
        let a: BTreeMap<_, _> = [("k", "left".to_string())].into_iter().collect();
        let b: BTreeMap<_, _> = [("k", "-right".to_string())].into_iter().collect();
        assert_eq!(a.combine(b)["k"], "left-right");
    }

    #[test]
    fn test_set_combine_is_union() {
        let a: HashSet<_> = ["a", "b"].into_iter().collect();
        let b: HashSet<_> = ["b", "c"].into_iter().collect();
        let merged = a.combine(b);
        assert_eq!(merged.len(), 3);
        assert!(merged.contains("a") && merged.contains("b") && merged.contains("c"));

        let a: BTreeSet<_> = [3, 1].into_iter().collect();
        let b: BTreeSet<_> = [2].into_iter().collect();
        assert_eq!(a.combine(b).into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
