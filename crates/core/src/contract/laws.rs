//! Law checkers for the equality, ordering and hash contracts.
//!
//! Nothing in the type system stops a hand-written `PartialEq`, `Ord` or
//! `Hash` from disagreeing with the others. Such mistakes stay silent until
//! a set keeps a duplicate or a sort misplaces a tie. The checkers here
//! sample values of a type and report every law that fails on them.
//!
//! | Checker          | Laws                                              |
//! |------------------|---------------------------------------------------|
//! | `check_equality` | reflexive, symmetric, transitive                  |
//! | `check_hashing`  | `a == b` implies `hash(a) == hash(b)`             |
//! | `check_ordering` | `a == b` iff `cmp(a, b) == Equal`; antisymmetric  |
//!
//! Only the first `max_law_samples` values are inspected. Transitivity
//! walks every triple, so keep sample sets small.

use super::hashing::{hash_code_with, HasherKind};
use crate::config::ConcordConfig;
use crate::error::{ConcordError, ConcordResult, ContractViolation};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, warn};

/// Outcome of running a checker over a sample set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LawReport {
    /// Number of individual law evaluations performed
    pub checks: usize,
    /// Every violation found, in discovery order
    pub violations: Vec<ContractViolation>,
}

impl LawReport {
    /// No violations were found
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Combine two reports
    pub fn merge(mut self, other: LawReport) -> LawReport {
        self.checks += other.checks;
        self.violations.extend(other.violations);
        self
    }

    /// Fail with the first violation, if any.
    pub fn into_result(self) -> ConcordResult<()> {
        match self.violations.into_iter().next() {
            Some(violation) => Err(ConcordError::Violation(violation)),
            None => Ok(()),
        }
    }

    fn record(&mut self, violation: ContractViolation) {
        warn!(%violation, "Contract law violated");
        self.violations.push(violation);
    }
}

/// Samples values and checks the contract laws over them.
#[derive(Debug, Clone, Copy)]
pub struct LawChecker {
    hasher: HasherKind,
    max_samples: usize,
}

impl Default for LawChecker {
    fn default() -> Self {
        LawChecker::new(&ConcordConfig::default())
    }
}

impl LawChecker {
    /// Build a checker from configuration
    pub fn new(config: &ConcordConfig) -> Self {
        LawChecker {
            hasher: config.hasher,
            max_samples: config.max_law_samples.max(1),
        }
    }

    /// Hasher used by `check_hashing`
    pub fn hasher(&self) -> HasherKind {
        self.hasher
    }

    /// Sample cap
    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    fn window<'a, T>(&self, samples: &'a [T]) -> &'a [T] {
        &samples[..samples.len().min(self.max_samples)]
    }

    /// Check reflexivity, symmetry and transitivity of `==`.
    #[allow(clippy::eq_op)]
    pub fn check_equality<T: PartialEq + Debug>(&self, samples: &[T]) -> LawReport {
        let samples = self.window(samples);
        let mut report = LawReport::default();

        for a in samples {
            report.checks += 1;
            if a != a {
                report.record(ContractViolation::Reflexivity { value: render(a) });
            }
        }

        for (i, a) in samples.iter().enumerate() {
            for b in &samples[i + 1..] {
                report.checks += 1;
                let forward = a == b;
                if forward != (b == a) {
                    report.record(ContractViolation::Symmetry {
                        left: render(a),
                        right: render(b),
                        forward,
                    });
                }
            }
        }

        for a in samples {
            for b in samples {
                if a != b {
                    continue;
                }
                for c in samples {
                    report.checks += 1;
                    if b == c && a != c {
                        report.record(ContractViolation::Transitivity {
                            a: render(a),
                            b: render(b),
                            c: render(c),
                        });
                    }
                }
            }
        }

        debug!(
            samples = samples.len(),
            checks = report.checks,
            violations = report.violations.len(),
            "Checked equality laws"
        );
        report
    }

    /// Check that equal values hash identically.
    pub fn check_hashing<T: PartialEq + Hash + Debug>(&self, samples: &[T]) -> LawReport {
        let samples = self.window(samples);
        let mut report = LawReport::default();
        let hashes: Vec<u64> = samples
            .iter()
            .map(|value| hash_code_with(self.hasher, value))
            .collect();

        for (i, a) in samples.iter().enumerate() {
            for (j, b) in samples.iter().enumerate().skip(i) {
                report.checks += 1;
                if a == b && hashes[i] != hashes[j] {
                    report.record(ContractViolation::HashMismatch {
                        left: render(a),
                        right: render(b),
                        left_hash: hashes[i],
                        right_hash: hashes[j],
                    });
                }
            }
        }

        debug!(
            samples = samples.len(),
            hasher = %self.hasher,
            checks = report.checks,
            violations = report.violations.len(),
            "Checked hash laws"
        );
        report
    }

    /// Check that ordering agrees with equality and is antisymmetric.
    pub fn check_ordering<T: Ord + Debug>(&self, samples: &[T]) -> LawReport {
        let samples = self.window(samples);
        let mut report = LawReport::default();

        for (i, a) in samples.iter().enumerate() {
            for b in &samples[i..] {
                report.checks += 1;
                let ordering = a.cmp(b);
                let equal = a == b;
                if equal != (ordering == Ordering::Equal) {
                    report.record(ContractViolation::OrderDisagreesWithEquality {
                        left: render(a),
                        right: render(b),
                        equal,
                        ordering: format!("{:?}", ordering),
                    });
                }
                if a < b && b < a {
                    report.record(ContractViolation::Antisymmetry {
                        left: render(a),
                        right: render(b),
                    });
                }
            }
        }

        debug!(
            samples = samples.len(),
            checks = report.checks,
            violations = report.violations.len(),
            "Checked ordering laws"
        );
        report
    }
}

fn render<T: Debug>(value: &T) -> String {
    format!("{:?}", value)
}
