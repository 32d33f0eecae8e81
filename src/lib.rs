//! # Monoidal
//!
//! Semigroup, Monoid and Endomorphism abstractions with lawful folds.
//!
//! ## Modules
//!
//! - `semigroup` - The `Semigroup` trait and instances for standard types
//! - `monoid` - The `Monoid` trait (a semigroup with an identity element)
//! - `wrappers` - Newtypes selecting an operation (`Sum`, `Product`, `Max`, ...)
//! - `endo` - Endomorphisms composed by sequential application
//! - `fold` - Sequential and parallel folds over combinable values
//! - `laws` - Runtime verification of associativity and identity laws
//! - `app` - Configuration and logging for the command-line front end
//! - `cli` - Argument parsing and command execution for `monoidal`
//!
//! ## Example
//!
//! ```
//! use monoidal::{fold_identity, fold_with_seed, Endo, Monoid, Semigroup};
//!
//! assert_eq!(fold_with_seed(vec![1, 2, 3], 0), 6);
//! assert_eq!(fold_identity(vec![vec![1, 2], vec![3]]), vec![1, 2, 3]);
//!
//! let pipeline = Endo::new(|x: i64| x + 1).combine(Endo::new(|x: i64| x * x));
//! assert_eq!(pipeline.apply(3), 16);
//! assert_eq!(Endo::<i64>::empty().apply(3), 3);
//! ```
pub mod app;
pub mod cli;
pub mod endo;
pub mod error;
pub mod fold;
pub mod laws;
pub mod monoid;
pub mod semigroup;
pub mod wrappers;


pub use endo::Endo;
pub use error::{LawViolation, MonoidalError, Result};
pub use fold::{
    combine_n, fold_identity, fold_with_seed, par_fold_identity, par_reduce, reduce, CombineExt,
};
pub use laws::{LawConfig, LawReport};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, First, Last, Max, Min, Product, Sum};
