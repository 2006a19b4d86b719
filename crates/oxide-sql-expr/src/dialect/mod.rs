//! SQL Dialect support.
//!
//! A [`Dialect`] is the formatting authority the renderer calls back into:
//! it owns literal quoting, identifier escaping, and the syntax of every
//! node kind. Each method receives the already-rendered text of the node's
//! children. The default methods produce ANSI/PostgreSQL syntax; a dialect
//! overrides only what differs.

mod generic;

pub use generic::GenericDialect;

use crate::operator::{Arity, Operator};
use crate::value::SqlValue;

/// Trait for dialect-specific rendering.
///
/// Renderers may be called from several threads at once, so dialects must
/// be `Send + Sync` and keep no mutable state.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns whether identifiers are quoted when rendered.
    fn quote_identifiers(&self) -> bool {
        false
    }

    /// Renders an identifier, quoting and escaping it if the dialect
    /// quotes identifiers.
    fn quote_identifier(&self, name: &str) -> String {
        if !self.quote_identifiers() {
            return String::from(name);
        }
        let quote = self.identifier_quote();
        let escaped = name.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }

    /// Renders a scalar value.
    fn literal_value(&self, value: &SqlValue) -> String {
        value.to_sql_literal()
    }

    /// Renders a parenthesized value list. An empty list renders as
    /// `(NULL)` so that `x IN ()` is never produced.
    fn value_list_sql(&self, items: &[String]) -> String {
        if items.is_empty() {
            return String::from("(NULL)");
        }
        format!("({})", items.join(", "))
    }

    /// Renders a nested query.
    fn subquery_sql(&self, sql: &str) -> String {
        format!("({sql})")
    }

    /// Renders an operator applied to its rendered operands.
    ///
    /// Unary operators are prefixes (`NOT x`; the no-op renders its operand
    /// alone), binary operators are parenthesized infixes, and variadic
    /// operators join their operands inside one pair of parentheses.
    fn complex_expression_sql(&self, op: Operator, args: &[String]) -> String {
        match (op.arity(), args) {
            (Arity::Unary, [arg]) => match op {
                Operator::Noop => arg.clone(),
                _ => format!("{} {arg}", op.as_str()),
            },
            (Arity::Binary, [left, right]) if op.is_pattern_match() => {
                self.match_expression_sql(op, left, right)
            }
            (Arity::Binary, [left, right]) => format!("({left} {} {right})", op.as_str()),
            _ => format!("({})", args.join(&format!(" {} ", op.as_str()))),
        }
    }

    /// Renders a LIKE or regular-expression match.
    fn match_expression_sql(&self, op: Operator, left: &str, pattern: &str) -> String {
        format!("({left} {} {pattern})", op.as_str())
    }

    /// Renders `expr AS alias`.
    fn aliased_expression_sql(&self, expr: &str, alias: &str) -> String {
        format!("{expr} AS {}", self.quote_identifier(alias))
    }

    /// Renders an ORDER BY entry.
    fn ordered_expression_sql(&self, expr: &str, descending: bool) -> String {
        let direction = if descending { "DESC" } else { "ASC" };
        format!("{expr} {direction}")
    }

    /// Renders `qualifier.name`; `name` is already rendered.
    fn qualified_identifier_sql(&self, qualifier: &str, name: &str) -> String {
        format!("{}.{name}", self.quote_identifier(qualifier))
    }

    /// Renders `table.*`.
    fn column_all_sql(&self, table: &str) -> String {
        format!("{}.*", self.quote_identifier(table))
    }

    /// Renders a function call.
    fn function_sql(&self, name: &str, args: &[String]) -> String {
        format!("{name}({})", args.join(", "))
    }

    /// Renders a call whose two arguments are separated by `joiner`.
    fn irregular_function_sql(&self, name: &str, arg1: &str, joiner: &str, arg2: &str) -> String {
        format!("{name}({arg1} {joiner} {arg2})")
    }

    /// Renders a searched CASE expression.
    fn case_expression_sql(&self, conditions: &[(String, String)], default: &str) -> String {
        let mut sql = String::from("CASE");
        for (condition, result) in conditions {
            sql.push_str(&format!(" WHEN {condition} THEN {result}"));
        }
        sql.push_str(&format!(" ELSE {default} END"));
        sql
    }

    /// Renders an array subscript.
    fn subscript_sql(&self, base: &str, indices: &[String]) -> String {
        format!("{base}[{}]", indices.join(", "))
    }
}
