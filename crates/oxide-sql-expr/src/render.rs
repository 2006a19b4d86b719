//! Rendering expression trees to SQL text.
//!
//! The renderer walks the tree and hands each node's rendered children to
//! the [`Dialect`], which alone decides the final syntax.

use tracing::trace;

use crate::ast::{
    AliasedExpression, BooleanExpression, CaseExpression, ColumnAll, ComplexExpression, Expr,
    Flavor, Function, Identifier, IrregularFunction, LiteralString, NumericExpression,
    OrderedExpression, QualifiedIdentifier, StringExpression, Subscript,
};
use crate::dialect::Dialect;
use crate::error::{ExprError, Result};

/// Types that render to SQL text.
pub trait ToSql {
    /// Renders the node with `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::UnsupportedPattern`] if a pattern-match operator
    /// has an operand that is neither text nor a text-valued expression.
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String>;
}

/// Renders `node` with `dialect`.
///
/// # Errors
///
/// See [`ToSql::to_sql`].
pub fn render<N: ToSql + ?Sized>(node: &N, dialect: &dyn Dialect) -> Result<String> {
    node.to_sql(dialect)
}

fn render_all(exprs: &[Expr], dialect: &dyn Dialect) -> Result<Vec<String>> {
    exprs.iter().map(|expr| expr.to_sql(dialect)).collect()
}

impl ToSql for Expr {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        match self {
            Self::Value(value) => Ok(dialect.literal_value(value)),
            Self::Identifier(identifier) => identifier.to_sql(dialect),
            Self::Literal(literal) => literal.to_sql(dialect),
            Self::List(items) => Ok(dialect.value_list_sql(&render_all(items, dialect)?)),
            Self::Subquery(query) => Ok(dialect.subquery_sql(query.sql())),
            Self::Complex(complex) => complex.to_sql(dialect),
            Self::Qualified(qualified) => qualified.to_sql(dialect),
            Self::ColumnAll(column_all) => column_all.to_sql(dialect),
            Self::Function(function) => function.to_sql(dialect),
            Self::IrregularFunction(function) => function.to_sql(dialect),
            Self::Case(case) => case.to_sql(dialect),
            Self::Subscript(subscript) => subscript.to_sql(dialect),
        }
    }
}

/// Describes a pattern operand no match operator can use, or `None` if the
/// operand is acceptable.
fn unsupported_pattern(pattern: &Expr) -> Option<String> {
    match pattern {
        Expr::Value(value) if !value.is_text() => Some(format!("{} value", value.kind_name())),
        Expr::List(_) => Some(String::from("value list")),
        Expr::ColumnAll(_) => Some(String::from("column wildcard")),
        Expr::Complex(complex)
            if matches!(complex.flavor(), Flavor::Boolean | Flavor::Numeric) =>
        {
            Some(format!("{} expression", complex.flavor()))
        }
        _ => None,
    }
}

impl ToSql for ComplexExpression {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        let op = self.op();
        if op.is_pattern_match() {
            if let Some(found) = self.args().get(1).and_then(unsupported_pattern) {
                return Err(ExprError::UnsupportedPattern { op, found });
            }
        }
        trace!(op = %op, dialect = dialect.name(), "rendering complex expression");
        let args = render_all(self.args(), dialect)?;
        Ok(dialect.complex_expression_sql(op, &args))
    }
}

macro_rules! flavored_to_sql {
    ($($ty:ty),*) => {
        $(
            impl ToSql for $ty {
                fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
                    self.as_ref().to_sql(dialect)
                }
            }
        )*
    };
}

flavored_to_sql!(BooleanExpression, NumericExpression, StringExpression);

impl ToSql for Identifier {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        Ok(dialect.quote_identifier(self.name()))
    }
}

impl ToSql for LiteralString {
    fn to_sql(&self, _dialect: &dyn Dialect) -> Result<String> {
        Ok(String::from(self.as_str()))
    }
}

impl ToSql for AliasedExpression {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        let expr = self.expression().to_sql(dialect)?;
        Ok(dialect.aliased_expression_sql(&expr, self.alias()))
    }
}

impl ToSql for OrderedExpression {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        let expr = self.expression().to_sql(dialect)?;
        Ok(dialect.ordered_expression_sql(&expr, self.descending()))
    }
}

impl ToSql for QualifiedIdentifier {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        let name = self.name().to_sql(dialect)?;
        Ok(dialect.qualified_identifier_sql(self.qualifier(), &name))
    }
}

impl ToSql for ColumnAll {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        Ok(dialect.column_all_sql(self.table()))
    }
}

impl ToSql for Function {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        let args = render_all(self.args(), dialect)?;
        Ok(dialect.function_sql(self.name(), &args))
    }
}

impl ToSql for IrregularFunction {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        let arg1 = self.arg1().to_sql(dialect)?;
        let arg2 = self.arg2().to_sql(dialect)?;
        Ok(dialect.irregular_function_sql(self.name(), &arg1, self.joiner(), &arg2))
    }
}

impl ToSql for CaseExpression {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        let conditions = self
            .conditions()
            .iter()
            .map(|(condition, result)| Ok((condition.to_sql(dialect)?, result.to_sql(dialect)?)))
            .collect::<Result<Vec<_>>>()?;
        let default = self.default().to_sql(dialect)?;
        Ok(dialect.case_expression_sql(&conditions, &default))
    }
}

impl ToSql for Subscript {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        let base = self.base().to_sql(dialect)?;
        let indices = render_all(self.indices(), dialect)?;
        Ok(dialect.subscript_sql(&base, &indices))
    }
}
