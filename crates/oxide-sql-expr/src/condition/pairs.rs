//! Translation of (left, right) value pairs into comparisons.

use core::ops::{Range, RangeInclusive};

use tracing::debug;

use super::invert::invert;
use super::pattern::{compile_match, Pattern};
use crate::ast::{BooleanExpression, Expr, Flavor, Identifier, LiteralString, Subquery};
use crate::error::{ExprError, Result};
use crate::operator::Operator;
use crate::value::SqlValue;

/// The right-hand side of a value pair, classified by shape.
///
/// The shape decides which comparison [`translate_pair`] produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonTarget {
    /// `left >= lower AND left <= upper` (or `< upper` when exclusive).
    Range {
        /// Lower bound, always inclusive.
        lower: Expr,
        /// Upper bound.
        upper: Expr,
        /// Whether the upper bound is included.
        inclusive: bool,
    },
    /// `left IN (values)`
    Set(Vec<Expr>),
    /// `left IS NULL`
    Null,
    /// A pattern match, see [`compile_match`].
    Pattern(Pattern),
    /// `left IN (subquery)`
    Subquery(Subquery),
    /// `left = value`
    Scalar(Expr),
}

impl From<Expr> for ComparisonTarget {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Value(SqlValue::Null) => Self::Null,
            Expr::List(values) => Self::Set(values),
            Expr::Subquery(query) => Self::Subquery(query),
            other => Self::Scalar(other),
        }
    }
}

impl<T: Into<Expr>> From<RangeInclusive<T>> for ComparisonTarget {
    fn from(range: RangeInclusive<T>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::Range {
            lower: lower.into(),
            upper: upper.into(),
            inclusive: true,
        }
    }
}

impl<T: Into<Expr>> From<Range<T>> for ComparisonTarget {
    fn from(range: Range<T>) -> Self {
        Self::Range {
            lower: range.start.into(),
            upper: range.end.into(),
            inclusive: false,
        }
    }
}

impl<T: Into<Expr>> From<Vec<T>> for ComparisonTarget {
    fn from(values: Vec<T>) -> Self {
        Self::Set(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for ComparisonTarget {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Pattern> for ComparisonTarget {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<regex::Regex> for ComparisonTarget {
    fn from(regex: regex::Regex) -> Self {
        Self::Pattern(Pattern::from(&regex))
    }
}

impl From<Subquery> for ComparisonTarget {
    fn from(query: Subquery) -> Self {
        Self::Subquery(query)
    }
}

macro_rules! scalar_target {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ComparisonTarget {
                fn from(value: $ty) -> Self {
                    Expr::from(value).into()
                }
            }
        )*
    };
}

scalar_target!(
    SqlValue,
    bool,
    i64,
    i32,
    i16,
    i8,
    u32,
    u16,
    u8,
    f64,
    f32,
    String,
    &str,
    Identifier,
    LiteralString
);

/// Translates a (left, right) pair into a comparison chosen by the shape of
/// `right`.
///
/// | right                | result                              |
/// |----------------------|-------------------------------------|
/// | `1..=10`             | `(left >= 1 AND left <= 10)`        |
/// | `1..10`              | `(left >= 1 AND left < 10)`         |
/// | list or subquery     | `left IN right`                     |
/// | NULL                 | `left IS NULL`                      |
/// | pattern              | `left LIKE p` / `left ~ p`          |
/// | anything else        | `left = right`                      |
///
/// # Errors
///
/// Never fails for well-formed targets; the `Result` carries errors from
/// the underlying constructors.
pub fn translate_pair(
    left: impl Into<Expr>,
    right: impl Into<ComparisonTarget>,
) -> Result<BooleanExpression> {
    let left = left.into();
    match right.into() {
        ComparisonTarget::Range {
            lower,
            upper,
            inclusive,
        } => {
            let upper_op = if inclusive {
                Operator::LtEq
            } else {
                Operator::Lt
            };
            let low = BooleanExpression::new(Operator::GtEq, [left.clone(), lower])?;
            let high = BooleanExpression::new(upper_op, [left, upper])?;
            BooleanExpression::new(Operator::And, [low, high])
        }
        ComparisonTarget::Set(values) => {
            BooleanExpression::new(Operator::In, [left, Expr::List(values)])
        }
        ComparisonTarget::Subquery(query) => {
            BooleanExpression::new(Operator::In, [left, Expr::Subquery(query)])
        }
        ComparisonTarget::Null => BooleanExpression::new(Operator::Is, [left, Expr::null()]),
        ComparisonTarget::Pattern(pattern) => compile_match(left, [pattern], false),
        ComparisonTarget::Scalar(value) => BooleanExpression::new(Operator::Eq, [left, value]),
    }
}

/// Translates every pair and joins the comparisons with AND.
///
/// A single pair yields its comparison without a wrapping AND.
///
/// # Errors
///
/// Returns [`ExprError::ArityMismatch`](crate::ExprError::ArityMismatch)
/// when `pairs` is empty.
pub fn translate_pairs<I, L, R>(pairs: I) -> Result<BooleanExpression>
where
    I: IntoIterator<Item = (L, R)>,
    L: Into<Expr>,
    R: Into<ComparisonTarget>,
{
    translate_pairs_with(pairs, Operator::And, false)
}

/// Translates every pair, optionally inverts each comparison, and joins
/// them with `combinator`.
///
/// Inverting the members rather than the combined result means that
/// `translate_pairs_with(p, Operator::Or, true)` is the complement of
/// `translate_pairs(p)` without a leading NOT. A single pair yields its
/// comparison without a wrapping combinator.
///
/// # Errors
///
/// Returns [`ExprError::FlavorMismatch`] if `combinator` is neither AND
/// nor OR, [`ExprError::ArityMismatch`] when `pairs` is empty, and
/// [`ExprError::NotInvertible`] if a comparison cannot be inverted.
pub fn translate_pairs_with<I, L, R>(
    pairs: I,
    combinator: Operator,
    negate: bool,
) -> Result<BooleanExpression>
where
    I: IntoIterator<Item = (L, R)>,
    L: Into<Expr>,
    R: Into<ComparisonTarget>,
{
    if !matches!(combinator, Operator::And | Operator::Or) {
        debug!(op = %combinator, "pairs can only be joined with AND or OR");
        return Err(ExprError::FlavorMismatch {
            op: combinator,
            expected: Flavor::Boolean,
        });
    }

    let mut conditions = pairs
        .into_iter()
        .map(|(left, right)| {
            let condition = translate_pair(left, right)?;
            if negate {
                invert(condition)
            } else {
                Ok(condition)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    if conditions.len() == 1 {
        if let Some(condition) = conditions.pop() {
            return Ok(condition);
        }
    }
    BooleanExpression::new(combinator, conditions)
}
