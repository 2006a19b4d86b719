//! SQLite dialect implementation.

use oxide_sql_expr::dialect::Dialect;
use oxide_sql_expr::operator::Operator;
use oxide_sql_expr::value::SqlValue;

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn identifier_quote(&self) -> char {
        '"' // SQLite also accepts backticks, but double quotes are standard
    }

    fn quote_identifiers(&self) -> bool {
        true
    }

    fn literal_value(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Bool(b) => String::from(if *b { "1" } else { "0" }),
            other => other.to_sql_literal(),
        }
    }

    fn match_expression_sql(&self, op: Operator, left: &str, pattern: &str) -> String {
        let (keyword, pattern) = match op {
            Operator::Like | Operator::ILike => ("LIKE", String::from(pattern)),
            Operator::NotLike | Operator::NotILike => ("NOT LIKE", String::from(pattern)),
            Operator::Match => ("REGEXP", String::from(pattern)),
            Operator::NotMatch => ("NOT REGEXP", String::from(pattern)),
            Operator::IMatch => ("REGEXP", format!("('(?i)' || {pattern})")),
            Operator::NotIMatch => ("NOT REGEXP", format!("('(?i)' || {pattern})")),
            _ => (op.as_str(), String::from(pattern)),
        };
        format!("({left} {keyword} {pattern})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_dialect() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.name(), "sqlite");
        assert_eq!(dialect.identifier_quote(), '"');
        assert!(dialect.quote_identifiers());
        assert_eq!(dialect.quote_identifier("order"), "\"order\"");
    }

    #[test]
    fn test_booleans_are_integers() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.literal_value(&SqlValue::Bool(true)), "1");
        assert_eq!(dialect.literal_value(&SqlValue::Bool(false)), "0");
        assert_eq!(dialect.literal_value(&SqlValue::Null), "NULL");
    }

    #[test]
    fn test_match_operators() {
        let dialect = SqliteDialect::new();
        let m = |op| dialect.match_expression_sql(op, "x", "'a'");
        assert_eq!(m(Operator::Like), "(x LIKE 'a')");
        assert_eq!(m(Operator::ILike), "(x LIKE 'a')");
        assert_eq!(m(Operator::NotILike), "(x NOT LIKE 'a')");
        assert_eq!(m(Operator::Match), "(x REGEXP 'a')");
        assert_eq!(m(Operator::NotMatch), "(x NOT REGEXP 'a')");
        assert_eq!(m(Operator::IMatch), "(x REGEXP ('(?i)' || 'a'))");
        assert_eq!(m(Operator::NotIMatch), "(x NOT REGEXP ('(?i)' || 'a'))");
    }
}
