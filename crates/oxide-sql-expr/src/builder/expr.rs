//! Shorthand constructors for leaf nodes.

use crate::ast::{
    CaseExpression, ColumnAll, Expr, Function, Identifier, LiteralString, QualifiedIdentifier,
    Subquery, Subscript,
};
use crate::error::Result;
use crate::value::ToSqlValue;

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Identifier {
    Identifier::new(name)
}

/// Creates a `table.column` reference.
#[must_use]
pub fn qualified(table: &str, name: &str) -> QualifiedIdentifier {
    QualifiedIdentifier::column(table, name)
}

/// Creates a `table.*` reference.
#[must_use]
pub fn column_all(table: &str) -> ColumnAll {
    ColumnAll::new(table)
}

/// Creates verbatim SQL. The text is not escaped.
#[must_use]
pub fn lit(sql: &str) -> LiteralString {
    LiteralString::new(sql)
}

/// Creates a scalar value.
#[must_use]
pub fn val<T: ToSqlValue>(value: T) -> Expr {
    Expr::value(value)
}

/// Creates a value list.
#[must_use]
pub fn list<I, T>(items: I) -> Expr
where
    I: IntoIterator<Item = T>,
    T: Into<Expr>,
{
    Expr::list(items)
}

/// Creates a function call.
#[must_use]
pub fn func<I, A>(name: &str, args: I) -> Function
where
    I: IntoIterator<Item = A>,
    A: Into<Expr>,
{
    Function::new(name, args)
}

/// Wraps the SQL of a complete query as an operand.
#[must_use]
pub fn subquery(sql: &str) -> Subquery {
    Subquery::new(sql)
}

/// Creates an array subscript.
#[must_use]
pub fn subscript<I, A>(base: impl Into<Expr>, indices: I) -> Subscript
where
    I: IntoIterator<Item = A>,
    A: Into<Expr>,
{
    Subscript::new(base, indices)
}

/// Creates a searched CASE expression.
///
/// # Errors
///
/// Returns [`ExprError::MalformedCaseConditions`](crate::ExprError::MalformedCaseConditions)
/// if `conditions` is empty.
pub fn case<I, C, R>(conditions: I, default: impl Into<Expr>) -> Result<CaseExpression>
where
    I: IntoIterator<Item = (C, R)>,
    C: Into<Expr>,
    R: Into<Expr>,
{
    CaseExpression::new(conditions, default)
}
