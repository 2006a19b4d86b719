//! Tests for decorator capabilities and the rendering of leaf and
//! decorator nodes.

mod common;
use common::*;

use oxide_sql_expr::builder::{
    case, col, column_all, func, lit, qualified, subquery, subscript, val, Aliasable,
    BooleanCapable, Castable, Comparable, Concatenable, NumericCapable, Orderable, Qualifiable,
    Reinterpretable,
};
use oxide_sql_expr::{
    CaseExpression, Expr, ExprError, Flavor, GenericDialect, Identifier, Operator,
    QualifiedIdentifier, Subscript,
};

// ===================================================================
// Alias and order
// ===================================================================

#[test]
fn alias() {
    assert_eq!(sql(&col("price").alias("p")), "price AS p");
    assert_eq!(
        sql(&col("price").mul(2).unwrap().alias("double")),
        "(price * 2) AS double"
    );
}

#[test]
fn quoted_alias() {
    assert_eq!(
        quoted_sql(&col("order").alias("the \"order\"")),
        "\"order\" AS \"the \"\"order\"\"\""
    );
}

#[test]
fn ordering() {
    assert_eq!(sql(&col("id").asc()), "id ASC");
    assert_eq!(sql(&col("id").desc()), "id DESC");
    assert_eq!(sql(&col("id").desc().reversed()), "id ASC");
    assert_eq!(
        sql(&func("lower", [col("name")]).asc()),
        "lower(name) ASC"
    );
}

#[test]
fn decorating_does_not_change_the_receiver() {
    let sum = col("a").add(col("b")).unwrap();
    let aliased = sum.clone().alias("total");
    let ordered = sum.clone().desc();
    assert_eq!(sql(&sum), "(a + b)");
    assert_eq!(sql(&aliased), "(a + b) AS total");
    assert_eq!(sql(&ordered), "(a + b) DESC");
}

// ===================================================================
// Qualification
// ===================================================================

#[test]
fn qualify() {
    assert_eq!(sql(&col("id").qualify("users")), "users.id");
    assert_eq!(sql(&qualified("users", "id")), "users.id");
    assert_eq!(
        sql(&col("id").qualify("users").qualify("public")),
        "public.users.id"
    );
    assert_eq!(
        quoted_sql(&QualifiedIdentifier::column("users", "id")),
        "\"users\".\"id\""
    );
}

#[test]
fn column_wildcard() {
    assert_eq!(sql(&column_all("users")), "users.*");
    assert_eq!(quoted_sql(&column_all("users")), "\"users\".*");
}

// ===================================================================
// Casts and extract
// ===================================================================

#[test]
fn cast() {
    assert_eq!(sql(&col("x").cast("date")), "cast(x AS date)");
    assert_eq!(sql(&col("x").cast_numeric(None)), "cast(x AS integer)");
    assert_eq!(
        sql(&col("x").cast_numeric(Some("bigint")).add(1).unwrap()),
        "(cast(x AS bigint) + 1)"
    );
    assert_eq!(sql(&col("x").cast_string(None)), "cast(x AS text)");
}

#[test]
fn cast_of_predicate() {
    let cond = col("x").gt(1).unwrap();
    assert_eq!(sql(&cond.cast("int")), "cast((x > 1) AS int)");
}

#[test]
fn extract() {
    let year = col("created_at").extract("year");
    assert_eq!(year.as_ref().flavor(), Flavor::Numeric);
    assert_eq!(sql(&year), "extract(year FROM created_at)");
    assert_eq!(
        sql(&year.gt(2020).unwrap()),
        "(extract(year FROM created_at) > 2020)"
    );
}

// ===================================================================
// Flavor-directed operators
// ===================================================================

#[test]
fn concatenation() {
    let full = col("first")
        .sql_string()
        .concat(" ")
        .unwrap()
        .concat(col("last"))
        .unwrap();
    assert_eq!(sql(&full), "((first || ' ') || last)");
}

#[test]
fn concat_rejects_boolean() {
    let err = col("name").sql_string().concat(true).unwrap_err();
    assert_eq!(err, ExprError::BooleanContext { op: Operator::Concat });
}

#[test]
fn boolean_operators_check_flavor() {
    let err = col("a").and(col("b").add(1).unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "cannot apply AND to a non-boolean expression");
}

#[test]
fn arithmetic_operators_check_flavor() {
    let err = col("a").sub(col("b").sql_string()).unwrap_err();
    assert_eq!(
        err,
        ExprError::FlavorMismatch {
            op: Operator::Sub,
            expected: Flavor::Numeric
        }
    );
}

#[test]
fn inequalities_reject_boolean() {
    assert!(matches!(
        col("a").lt(false),
        Err(ExprError::BooleanContext { op: Operator::Lt })
    ));
}

#[test]
fn reinterpreted_expression_renders_bare() {
    assert_eq!(sql(&col("flag").sql_boolean()), "flag");
    assert_eq!(
        sql(&col("flag").sql_boolean().or(col("other")).unwrap()),
        "(flag OR other)"
    );
}

// ===================================================================
// Functions, CASE, subscripts and leaves
// ===================================================================

#[test]
fn functions() {
    assert_eq!(sql(&func("count", [lit("*")])), "count(*)");
    assert_eq!(
        sql(&func("coalesce", [Expr::from(col("x")), val(0)])),
        "coalesce(x, 0)"
    );
    assert_eq!(sql(&func("now", Vec::<Expr>::new())), "now()");
}

#[test]
fn case_expression() {
    let expr = case(
        [
            (col("x").gt(10).unwrap(), Expr::from("big")),
            (col("x").gt(0).unwrap(), Expr::from("small")),
        ],
        "none",
    )
    .unwrap();
    assert_eq!(
        sql(&expr),
        "CASE WHEN (x > 10) THEN 'big' WHEN (x > 0) THEN 'small' ELSE 'none' END"
    );
    assert_eq!(
        sql(&expr.alias("size")),
        "CASE WHEN (x > 10) THEN 'big' WHEN (x > 0) THEN 'small' ELSE 'none' END AS size"
    );
}

#[test]
fn malformed_case() {
    assert_eq!(
        case(Vec::<(Expr, Expr)>::new(), 0).unwrap_err(),
        ExprError::MalformedCaseConditions
    );
    assert_eq!(
        CaseExpression::from_list(vec![Expr::list([1])], 0).unwrap_err(),
        ExprError::MalformedCaseConditions
    );
}

#[test]
fn subscripts() {
    let element = subscript(col("tags"), [1]);
    let deeper = element.append([2]);
    assert_eq!(sql(&element), "tags[1]");
    assert_eq!(sql(&deeper), "tags[1, 2]");
    assert_eq!(
        sql(&Subscript::new(col("m"), [col("i")]).add(1).unwrap()),
        "(m[i] + 1)"
    );
}

#[test]
fn literal_passes_through() {
    assert_eq!(sql(&lit("CURRENT_TIMESTAMP")), "CURRENT_TIMESTAMP");
    assert_eq!(
        sql(&col("at").lt(lit("CURRENT_TIMESTAMP")).unwrap()),
        "(at < CURRENT_TIMESTAMP)"
    );
}

#[test]
fn values_are_escaped() {
    assert_eq!(sql(&val("it's")), "'it''s'");
    assert_eq!(sql(&val(vec![0xDE_u8, 0xAD])), "X'DEAD'");
    assert_eq!(sql(&val(None::<i64>)), "NULL");
    assert_eq!(sql(&val(f64::NAN)), "NULL");
    assert_eq!(sql(&Expr::from(subquery("SELECT 1"))), "(SELECT 1)");
}

#[test]
fn identifier_quoting_is_configurable() {
    let dialect = GenericDialect::new().with_quoted_identifiers(true);
    let expr = col("user").gt(Identifier::new("limit")).unwrap();
    assert_eq!(
        oxide_sql_expr::render(&expr, &dialect).unwrap(),
        "(\"user\" > \"limit\")"
    );
}
