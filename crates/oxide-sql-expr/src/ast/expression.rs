//! The expression tree.

use super::complex::{ComplexExpression, Flavor};
use super::nodes::{
    CaseExpression, ColumnAll, Function, IrregularFunction, QualifiedIdentifier, Subscript,
};
use super::{BooleanExpression, NumericExpression, StringExpression};
use crate::condition::{translate_pairs, ComparisonTarget};
use crate::error::Result;
use crate::value::{SqlValue, ToSqlValue};

/// A column or table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    name: String,
}

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A SQL fragment copied verbatim into the rendered output.
///
/// **Warning**: the text is not escaped. Never build one from user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiteralString(String);

impl LiteralString {
    /// Creates a new literal fragment.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    /// Returns the fragment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An already-built query used as an operand, rendered in parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subquery {
    sql: String,
}

impl Subquery {
    /// Wraps the SQL of a complete query.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    /// Returns the query text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

/// A node of an expression tree.
///
/// Nodes own their children and are never modified after construction;
/// every derived expression allocates a new node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A scalar, quoted by the dialect.
    Value(SqlValue),
    /// A column or table reference.
    Identifier(Identifier),
    /// Verbatim SQL.
    Literal(LiteralString),
    /// A parenthesized list of values, e.g. the right side of `IN`.
    List(Vec<Expr>),
    /// A nested query.
    Subquery(Subquery),
    /// An operator applied to operands.
    Complex(ComplexExpression),
    /// `qualifier.name`
    Qualified(QualifiedIdentifier),
    /// `table.*`
    ColumnAll(ColumnAll),
    /// `name(args, ...)`
    Function(Function),
    /// `name(arg1 JOINER arg2)`, as used by CAST and EXTRACT.
    IrregularFunction(IrregularFunction),
    /// `CASE WHEN ... THEN ... ELSE ... END`
    Case(CaseExpression),
    /// `base[i, ...]`
    Subscript(Subscript),
}

impl Expr {
    /// Creates a scalar value expression.
    #[must_use]
    pub fn value<T: ToSqlValue>(value: T) -> Self {
        Self::Value(value.to_sql_value())
    }

    /// Creates a NULL value.
    #[must_use]
    pub const fn null() -> Self {
        Self::Value(SqlValue::Null)
    }

    /// Creates a list of values.
    #[must_use]
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns whether the expression only makes sense as a predicate.
    ///
    /// Boolean complex expressions, `TRUE`/`FALSE`/`NULL` and value lists
    /// may not be operands of numeric or string expressions.
    #[must_use]
    pub fn is_boolean_context(&self) -> bool {
        match self {
            Self::Value(value) => value.is_boolean_context(),
            Self::List(_) => true,
            Self::Complex(complex) => complex.flavor() == Flavor::Boolean,
            _ => false,
        }
    }

    /// Returns the flavor of a complex expression, or `None` for any
    /// other node.
    #[must_use]
    pub const fn flavor(&self) -> Option<Flavor> {
        match self {
            Self::Complex(complex) => Some(complex.flavor()),
            _ => None,
        }
    }
}

macro_rules! value_into_expr {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(value.to_sql_value())
                }
            }
        )*
    };
}

value_into_expr!(SqlValue, bool, i64, i32, i16, i8, u32, u16, u8, f64, f32, String, &str);

macro_rules! node_into_expr {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from(node: $ty) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

node_into_expr!(
    Identifier => Identifier,
    LiteralString => Literal,
    Subquery => Subquery,
    ComplexExpression => Complex,
    QualifiedIdentifier => Qualified,
    ColumnAll => ColumnAll,
    Function => Function,
    IrregularFunction => IrregularFunction,
    CaseExpression => Case,
    Subscript => Subscript,
);

/// An argument to a complex expression constructor.
///
/// Besides plain expressions, a constructor accepts a sequence of
/// (left, right) pairs, which is expanded into the conjunction of the
/// pairs' comparisons.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A ready expression.
    Expr(Expr),
    /// Value pairs awaiting translation.
    Pairs(Vec<(Expr, ComparisonTarget)>),
}

impl Operand {
    /// Creates an operand from (left, right) value pairs.
    pub fn pairs<I, L, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
        L: Into<Expr>,
        R: Into<ComparisonTarget>,
    {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(left, right)| (left.into(), right.into()))
                .collect(),
        )
    }

    pub(crate) fn expand(self) -> Result<Expr> {
        match self {
            Self::Expr(expr) => Ok(expr),
            Self::Pairs(pairs) => translate_pairs(pairs).map(Expr::from),
        }
    }
}

macro_rules! into_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Self::Expr(value.into())
                }
            }
        )*
    };
}

into_operand!(
    Expr,
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
    LiteralString,
    Subquery,
    ComplexExpression,
    BooleanExpression,
    NumericExpression,
    StringExpression,
    QualifiedIdentifier,
    ColumnAll,
    Function,
    IrregularFunction,
    CaseExpression,
    Subscript
);
