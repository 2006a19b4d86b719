//! Error types for expression construction and rendering.

use thiserror::Error;

use crate::ast::Flavor;
use crate::operator::{Arity, Operator};

/// Errors raised while building, inverting, or rendering expressions.
///
/// Construction errors surface immediately from the constructor that
/// detected them. A tree that was built successfully renders without
/// error, except for pattern-match operands the dialect cannot express
/// ([`ExprError::UnsupportedPattern`]).
#[derive(Debug, Error, PartialEq)]
pub enum ExprError {
    /// The operator symbol is not in the catalog.
    #[error("invalid operator {0}")]
    UnknownOperator(String),

    /// The argument count does not fit the operator's arity class.
    #[error("the {op} operator requires {arity}, got {given}")]
    ArityMismatch {
        /// The operator being constructed.
        op: Operator,
        /// The operator's arity class.
        arity: Arity,
        /// Number of arguments supplied.
        given: usize,
    },

    /// A boolean-typed argument was given to a numeric or string expression.
    #[error("cannot apply {op} to a boolean expression")]
    BooleanContext {
        /// The operator being constructed.
        op: Operator,
    },

    /// A complex expression of the wrong flavor was combined with an operator.
    #[error("cannot apply {op} to a non-{expected} expression")]
    FlavorMismatch {
        /// The operator being applied.
        op: Operator,
        /// The flavor the operator requires.
        expected: Flavor,
    },

    /// The expression has no logical complement.
    #[error("operator {op} cannot be inverted")]
    NotInvertible {
        /// The operator of the rejected expression.
        op: Operator,
    },

    /// A CASE expression was given no (condition, result) pairs.
    #[error("CASE expression requires at least one (condition, result) pair")]
    MalformedCaseConditions,

    /// A pattern-match operand is neither text nor a regular expression.
    #[error("unsupported match pattern for {op}: {found}")]
    UnsupportedPattern {
        /// The match operator.
        op: Operator,
        /// Description of the rejected operand.
        found: String,
    },

    /// A regular-expression pattern failed to compile.
    #[error("invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Result type alias for expression operations.
pub type Result<T> = std::result::Result<T, ExprError>;
