//! Rendering whole expression trees with the SQLite dialect.

use oxide_sql_expr::builder::{col, Aliasable, BooleanCapable, Castable, Comparable, StringCapable};
use oxide_sql_expr::{compile_match, render, translate_pairs_with, Operator, Pattern};
use oxide_sql_expr_sqlite::SqliteDialect;

fn sqlite(node: &dyn oxide_sql_expr::ToSql) -> String {
    render(node, &SqliteDialect::new()).unwrap_or_else(|e| panic!("Failed to render: {e}"))
}

#[test]
fn identifiers_are_quoted() {
    let cond = col("order").gt(5).unwrap();
    assert_eq!(sqlite(&cond), "(\"order\" > 5)");
    assert_eq!(
        sqlite(&col("total").cast("real").alias("t")),
        "cast(\"total\" AS real) AS \"t\""
    );
}

#[test]
fn booleans_render_as_integers() {
    let cond = col("active").and(true).unwrap();
    assert_eq!(sqlite(&cond), "(\"active\" AND 1)");
}

#[test]
fn case_insensitive_like() {
    let cond = col("name").ilike(["a%", "b%"]).unwrap();
    assert_eq!(
        sqlite(&cond),
        "((\"name\" LIKE 'a%') OR (\"name\" LIKE 'b%'))"
    );
    let negated = cond.not().unwrap();
    assert_eq!(
        sqlite(&negated),
        "((\"name\" NOT LIKE 'a%') AND (\"name\" NOT LIKE 'b%'))"
    );
}

#[test]
fn regular_expressions() {
    let cond = compile_match(col("code"), [Pattern::regex("^[A-Z]+$").unwrap()], false).unwrap();
    assert_eq!(sqlite(&cond), "(\"code\" REGEXP '^[A-Z]+$')");

    let cond = compile_match(col("code"), [Pattern::regex("(?i)^x").unwrap()], false).unwrap();
    assert_eq!(sqlite(&cond), "(\"code\" REGEXP ('(?i)' || '^x'))");
}

#[test]
fn negated_pairs() {
    let cond = translate_pairs_with(
        [(col("a"), 1), (col("b"), 2)],
        Operator::Or,
        true,
    )
    .unwrap();
    assert_eq!(sqlite(&cond), "((\"a\" != 1) OR (\"b\" != 2))");
}

#[test]
fn dialect_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SqliteDialect>();

    let dialect = SqliteDialect::new();
    let cond = col("name").ilike(["a%"]).unwrap();
    let rendered: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| sqlite_with(&cond, &dialect)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(rendered.iter().all(|out| out == "(\"name\" LIKE 'a%')"));
}

fn sqlite_with(node: &dyn oxide_sql_expr::ToSql, dialect: &SqliteDialect) -> String {
    render(node, dialect).unwrap()
}
