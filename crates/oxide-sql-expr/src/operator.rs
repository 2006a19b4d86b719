//! The operator catalog.
//!
//! Every operator a complex expression may carry is a variant of
//! [`Operator`]. The catalog answers two questions about each one: how many
//! arguments it takes ([`Operator::arity`]) and which operator is its logical
//! complement ([`Operator::inverse`]).

use core::fmt;
use core::str::FromStr;

use crate::error::ExprError;

/// Number of arguments an operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arity {
    /// Exactly one argument.
    Unary,
    /// Exactly two arguments.
    Binary,
    /// One or more arguments.
    Variadic,
}

impl Arity {
    /// Returns whether `count` arguments satisfy this arity class.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Unary => count == 1,
            Self::Binary => count == 2,
            Self::Variadic => count >= 1,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary => write!(f, "a single argument"),
            Self::Binary => write!(f, "precisely 2 arguments"),
            Self::Variadic => write!(f, "at least 1 argument"),
        }
    }
}

/// Operators usable in a complex expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    // Unary
    /// Logical NOT.
    Not,
    /// Identity wrap, used to reinterpret an expression's flavor.
    Noop,

    // Comparison
    Eq,
    NotEq,
    Is,
    IsNot,
    In,
    NotIn,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Pattern matching
    Like,
    NotLike,
    ILike,
    NotILike,
    /// Regular-expression match (`~`).
    Match,
    /// Negated regular-expression match (`!~`).
    NotMatch,
    /// Case-insensitive regular-expression match (`~*`).
    IMatch,
    /// Negated case-insensitive regular-expression match (`!~*`).
    NotIMatch,

    // Variadic
    And,
    Or,
    /// String concatenation (`||`).
    Concat,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator in the catalog.
    pub const ALL: [Self; 27] = [
        Self::Not,
        Self::Noop,
        Self::Eq,
        Self::NotEq,
        Self::Is,
        Self::IsNot,
        Self::In,
        Self::NotIn,
        Self::Lt,
        Self::Gt,
        Self::LtEq,
        Self::GtEq,
        Self::Like,
        Self::NotLike,
        Self::ILike,
        Self::NotILike,
        Self::Match,
        Self::NotMatch,
        Self::IMatch,
        Self::NotIMatch,
        Self::And,
        Self::Or,
        Self::Concat,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
    ];

    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Noop => "NOOP",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::ILike => "ILIKE",
            Self::NotILike => "NOT ILIKE",
            Self::Match => "~",
            Self::NotMatch => "!~",
            Self::IMatch => "~*",
            Self::NotIMatch => "!~*",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concat => "||",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns the arity class of the operator.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self {
            Self::Not | Self::Noop => Arity::Unary,
            Self::And
            | Self::Or
            | Self::Concat
            | Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div => Arity::Variadic,
            _ => Arity::Binary,
        }
    }

    /// Returns the logical complement of the operator, if it has one.
    ///
    /// The mapping is an involution: `op.inverse()?.inverse() == Some(op)`.
    /// Arithmetic and concatenation operators have no inverse.
    #[must_use]
    pub const fn inverse(&self) -> Option<Self> {
        let inverse = match self {
            Self::And => Self::Or,
            Self::Or => Self::And,
            Self::Not => Self::Noop,
            Self::Noop => Self::Not,
            Self::Eq => Self::NotEq,
            Self::NotEq => Self::Eq,
            Self::Is => Self::IsNot,
            Self::IsNot => Self::Is,
            Self::In => Self::NotIn,
            Self::NotIn => Self::In,
            Self::Lt => Self::GtEq,
            Self::GtEq => Self::Lt,
            Self::Gt => Self::LtEq,
            Self::LtEq => Self::Gt,
            Self::Like => Self::NotLike,
            Self::NotLike => Self::Like,
            Self::ILike => Self::NotILike,
            Self::NotILike => Self::ILike,
            Self::Match => Self::NotMatch,
            Self::NotMatch => Self::Match,
            Self::IMatch => Self::NotIMatch,
            Self::NotIMatch => Self::IMatch,
            Self::Concat | Self::Add | Self::Sub | Self::Mul | Self::Div => return None,
        };
        Some(inverse)
    }

    /// Returns whether the operator compares its left operand to a pattern.
    #[must_use]
    pub const fn is_pattern_match(&self) -> bool {
        matches!(
            self,
            Self::Like
                | Self::NotLike
                | Self::ILike
                | Self::NotILike
                | Self::Match
                | Self::NotMatch
                | Self::IMatch
                | Self::NotIMatch
        )
    }

    /// Returns whether the operator is one of the mathematical operators.
    #[must_use]
    pub const fn is_mathematical(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.as_str().eq_ignore_ascii_case(symbol))
            .ok_or_else(|| ExprError::UnknownOperator(String::from(s)))
    }
}
