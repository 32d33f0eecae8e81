//! Runtime checks for the semigroup and monoid laws
//!
//! The traits in this crate state their laws as contracts. The functions here
//! verify those contracts over concrete sample values, for use in tests and
//! debug builds. Nothing in the crate relies on them for correctness.

use crate::endo::Endo;
use crate::error::{LawViolation, MonoidalError, Result};
use crate::monoid::Monoid;
use crate::semigroup::Semigroup;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, warn};

/// Bounds on how much work a law check performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawConfig {
    /// Maximum number of `(a, b, c)` triples checked for associativity.
    pub max_triples: usize,
    /// Stop at the first violation and return it as an error.
    pub fail_fast: bool,
}

impl Default for LawConfig {
    fn default() -> Self {
        Self {
            max_triples: 512,
            fail_fast: false,
        }
    }
}

/// Outcome of checking a set of samples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LawReport {
    pub associativity_checked: usize,
    pub identity_checked: usize,
    pub violations: Vec<LawViolation>,
}

impl LawReport {
    pub fn is_lawful(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert into an error carrying the first violation, if any.
    pub fn into_result(self) -> Result<Self> {
        match self.violations.first() {
            Some(violation) => Err(MonoidalError::LawViolation(violation.clone())),
            None => Ok(self),
        }
    }

    fn record(
        &mut self,
        outcome: std::result::Result<(), LawViolation>,
        config: &LawConfig,
    ) -> Result<()> {
        if let Err(violation) = outcome {
            warn!("{}", violation);
            if config.fail_fast {
                return Err(MonoidalError::LawViolation(violation));
            }
            self.violations.push(violation);
        }
        Ok(())
    }
}

/// Check `(a·b)·c == a·(b·c)`.
pub fn check_associativity<S>(a: &S, b: &S, c: &S) -> std::result::Result<(), LawViolation>
where
    S: Semigroup + Clone + PartialEq + Debug,
{
    let left = a.clone().combine(b.clone()).combine(c.clone());
    let right = a.clone().combine(b.clone().combine(c.clone()));
    if left == right {
        Ok(())
    } else {
        Err(LawViolation::Associativity {
            a: format!("{a:?}"),
            b: format!("{b:?}"),
            c: format!("{c:?}"),
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        })
    }
}

/// Check `empty·a == a`.
pub fn check_left_identity<M>(a: &M) -> std::result::Result<(), LawViolation>
where
    M: Monoid + Clone + PartialEq + Debug,
{
    let result = M::empty().combine(a.clone());
    if &result == a {
        Ok(())
    } else {
        Err(LawViolation::LeftIdentity {
            a: format!("{a:?}"),
            result: format!("{result:?}"),
        })
    }
}

/// Check `a·empty == a`.
pub fn check_right_identity<M>(a: &M) -> std::result::Result<(), LawViolation>
where
    M: Monoid + Clone + PartialEq + Debug,
{
    let result = a.clone().combine(M::empty());
    if &result == a {
        Ok(())
    } else {
        Err(LawViolation::RightIdentity {
            a: format!("{a:?}"),
            result: format!("{result:?}"),
        })
    }
}

/// Check associativity over triples drawn from `samples`, in lexicographic
/// order, stopping after `config.max_triples`.
pub fn check_semigroup_laws<S>(samples: &[S], config: &LawConfig) -> Result<LawReport>
where
    S: Semigroup + Clone + PartialEq + Debug,
{
    let mut report = LawReport::default();
    for_each_triple(samples, config.max_triples, |a, b, c| {
        report.associativity_checked += 1;
        report.record(check_associativity(a, b, c), config)
    })?;

    debug!(
        "Checked {} triples from {} samples, {} violations",
        report.associativity_checked,
        samples.len(),
        report.violations.len()
    );
    Ok(report)
}

/// Check associativity plus both identity laws over `samples`.
pub fn check_monoid_laws<M>(samples: &[M], config: &LawConfig) -> Result<LawReport>
where
    M: Monoid + Clone + PartialEq + Debug,
{
    let mut report = check_semigroup_laws(samples, config)?;
    for sample in samples {
        report.identity_checked += 1;
        report.record(check_left_identity(sample), config)?;
        report.record(check_right_identity(sample), config)?;
    }
    Ok(report)
}

/// Check associativity of three endomorphisms by comparing their results
/// on each of `inputs`. Functions have no equality, so the check is
/// extensional and only as strong as the inputs supplied.
pub fn check_endo_associativity<T>(
    f: &Endo<T>,
    g: &Endo<T>,
    h: &Endo<T>,
    inputs: &[T],
) -> std::result::Result<(), LawViolation>
where
    T: Clone + PartialEq + Debug + 'static,
{
    let left = f.clone().combine(g.clone()).combine(h.clone());
    let right = f.clone().combine(g.clone().combine(h.clone()));
    for input in inputs {
        let l = left.apply(input.clone());
        let r = right.apply(input.clone());
        if l != r {
            return Err(LawViolation::Associativity {
                a: format!("{f:?}"),
                b: format!("{g:?}"),
                c: format!("{h:?}"),
                left: format!("{l:?} at input {input:?}"),
                right: format!("{r:?} at input {input:?}"),
            });
        }
    }
    Ok(())
}

fn for_each_triple<S, F>(samples: &[S], limit: usize, mut visit: F) -> Result<()>
where
    F: FnMut(&S, &S, &S) -> Result<()>,
{
    let mut visited = 0usize;
    for a in samples {
        for b in samples {
            for c in samples {
                if visited >= limit {
                    return Ok(());
                }
                visited += 1;
                visit(a, b, c)?;
            }
        }
    }
    Ok(())
}

/// Assert associativity of three values in debug builds only.
#[macro_export]
macro_rules! debug_assert_associative {
    ($a:expr, $b:expr, $c:expr $(,)?) => {
        if cfg!(debug_assertions) {
            if let Err(violation) = $crate::laws::check_associativity(&$a, &$b, &$c) {
                panic!("{}", violation);
            }
        }
    };
}
