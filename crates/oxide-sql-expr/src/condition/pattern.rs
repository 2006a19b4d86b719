//! Pattern matching with LIKE and regular expressions.

use regex::Regex;

use crate::ast::{BooleanExpression, Expr};
use crate::error::Result;
use crate::operator::Operator;

const CASE_INSENSITIVE_FLAG: &str = "(?i)";

/// A match target: LIKE text or a regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    /// A LIKE pattern, with `%` and `_` wildcards.
    Text(String),
    /// A regular expression.
    Regex {
        /// The expression source, without a leading `(?i)`.
        source: String,
        /// Whether the expression ignores case.
        case_insensitive: bool,
    },
}

impl Pattern {
    /// Creates a LIKE pattern.
    #[must_use]
    pub fn text(pattern: impl Into<String>) -> Self {
        Self::Text(pattern.into())
    }

    /// Creates a regular-expression pattern from its source.
    ///
    /// A leading `(?i)` marks the pattern case-insensitive and is removed
    /// from the source sent to the database.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::InvalidRegex`](crate::ExprError::InvalidRegex)
    /// if the source does not compile.
    pub fn regex(source: &str) -> Result<Self> {
        let compiled = Regex::new(source)?;
        Ok(Self::from(&compiled))
    }

    /// Returns whether the pattern itself asks for case-insensitive
    /// matching.
    #[must_use]
    pub const fn is_case_insensitive(&self) -> bool {
        match self {
            Self::Text(_) => false,
            Self::Regex {
                case_insensitive, ..
            } => *case_insensitive,
        }
    }

    fn into_condition(self, left: Expr, case_insensitive: bool) -> Result<BooleanExpression> {
        let pattern_flag = self.is_case_insensitive();
        let (op, pattern) = match self {
            Self::Text(text) => {
                let op = if case_insensitive {
                    Operator::ILike
                } else {
                    Operator::Like
                };
                (op, text)
            }
            Self::Regex { source, .. } => {
                let op = if case_insensitive || pattern_flag {
                    Operator::IMatch
                } else {
                    Operator::Match
                };
                (op, source)
            }
        };
        BooleanExpression::new(op, [left, Expr::from(pattern)])
    }
}

impl From<&str> for Pattern {
    fn from(pattern: &str) -> Self {
        Self::text(pattern)
    }
}

impl From<String> for Pattern {
    fn from(pattern: String) -> Self {
        Self::Text(pattern)
    }
}

impl From<&Regex> for Pattern {
    fn from(regex: &Regex) -> Self {
        let source = regex.as_str();
        match source.strip_prefix(CASE_INSENSITIVE_FLAG) {
            Some(rest) => Self::Regex {
                source: String::from(rest),
                case_insensitive: true,
            },
            None => Self::Regex {
                source: String::from(source),
                case_insensitive: false,
            },
        }
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self::from(&regex)
    }
}

/// Matches `left` against one or more patterns.
///
/// Text patterns compile to `LIKE` (`ILIKE` when `case_insensitive`),
/// regular expressions to `~` (`~*` when `case_insensitive` or the pattern
/// itself ignores case). Several patterns are joined with OR; a single
/// pattern yields its comparison alone.
///
/// # Errors
///
/// Returns [`ExprError::ArityMismatch`](crate::ExprError::ArityMismatch)
/// if `patterns` is empty.
pub fn compile_match<I, P>(
    left: impl Into<Expr>,
    patterns: I,
    case_insensitive: bool,
) -> Result<BooleanExpression>
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    let left = left.into();
    let mut conditions = patterns
        .into_iter()
        .map(|pattern| pattern.into().into_condition(left.clone(), case_insensitive))
        .collect::<Result<Vec<_>>>()?;

    if conditions.len() == 1 {
        if let Some(condition) = conditions.pop() {
            return Ok(condition);
        }
    }
    BooleanExpression::new(Operator::Or, conditions)
}
