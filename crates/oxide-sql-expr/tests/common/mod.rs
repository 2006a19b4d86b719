#![allow(dead_code)]

use oxide_sql_expr::{render, ExprError, GenericDialect, ToSql};

pub fn sql(node: &dyn ToSql) -> String {
    render(node, &GenericDialect::new())
        .unwrap_or_else(|e| panic!("Failed to render: {e}"))
}

pub fn sql_err(node: &dyn ToSql) -> ExprError {
    render(node, &GenericDialect::new()).expect_err("Expected a render error")
}

pub fn quoted_sql(node: &dyn ToSql) -> String {
    render(node, &GenericDialect::new().with_quoted_identifiers(true))
        .unwrap_or_else(|e| panic!("Failed to render: {e}"))
}
