//! Error types for concord
//!
//! Contract operations themselves are total and never fail. Errors only
//! arise at the edges: loading configuration and turning a law report
//! into a hard failure. We use `thiserror` for automatic `Display` and
//! `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for concord operations
pub type ConcordResult<T> = std::result::Result<T, ConcordError>;

/// A broken contract law, found by sampling values of a type.
///
/// Values are captured through their `Debug` rendering so a violation can
/// outlive the samples it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// `a == a` returned false
    #[error("Reflexivity violated: {value} != itself")]
    Reflexivity {
        /// Offending value
        value: String,
    },

    /// `a == b` disagrees with `b == a`
    #[error("Symmetry violated: {left} == {right} is {forward}, reversed comparison differs")]
    Symmetry {
        /// Left operand
        left: String,
        /// Right operand
        right: String,
        /// Result of `left == right`
        forward: bool,
    },

    /// `a == b` and `b == c` but `a != c`
    #[error("Transitivity violated: {a} == {b} and {b} == {c}, but {a} != {c}")]
    Transitivity {
        /// First value
        a: String,
        /// Middle value
        b: String,
        /// Last value
        c: String,
    },

    /// Equal values produced different hash codes
    #[error("Hash mismatch: {left} == {right} but hashes {left_hash:#x} != {right_hash:#x}")]
    HashMismatch {
        /// Left operand
        left: String,
        /// Right operand
        right: String,
        /// Hash code of the left operand
        left_hash: u64,
        /// Hash code of the right operand
        right_hash: u64,
    },

    /// Ordering and equality disagree about whether two values tie
    #[error("Ordering disagrees with equality: {left} vs {right} (equal: {equal}, ordering: {ordering})")]
    OrderDisagreesWithEquality {
        /// Left operand
        left: String,
        /// Right operand
        right: String,
        /// Result of `left == right`
        equal: bool,
        /// Result of `left.cmp(right)`, rendered
        ordering: String,
    },

    /// Both `a < b` and `b < a` hold
    #[error("Antisymmetry violated: {left} < {right} and {right} < {left}")]
    Antisymmetry {
        /// Left operand
        left: String,
        /// Right operand
        right: String,
    },
}

/// Error types for concord
#[derive(Debug, Error)]
pub enum ConcordError {
    /// I/O error while reading or writing configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// A contract law does not hold for the sampled values
    #[error("Contract violation: {0}")]
    Violation(#[from] ContractViolation),
}

impl ConcordError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        ConcordError::Config(message.into())
    }

    /// Check whether this error reports a contract violation
    pub fn is_violation(&self) -> bool {
        matches!(self, ConcordError::Violation(_))
    }
}
