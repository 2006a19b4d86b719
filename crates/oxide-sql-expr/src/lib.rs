//! # oxide-sql-expr
//!
//! A typed SQL expression algebra rendered through pluggable dialects.
//!
//! This crate provides:
//! - An immutable expression tree with boolean, numeric and string flavors
//!   checked at construction
//! - Translation of (column, value) pairs into comparisons chosen by the
//!   value's shape: ranges, sets, NULL, patterns and scalars
//! - LIKE and regular-expression match compilation
//! - Logical inversion of predicates using De Morgan's laws
//! - A [`Dialect`] trait that owns every piece of output syntax
//!
//! ## Conditions from value pairs
//!
//! ```rust
//! use oxide_sql_expr::{render, translate_pairs, GenericDialect, Identifier};
//!
//! let cond = translate_pairs([
//!     (Identifier::new("age"), oxide_sql_expr::ComparisonTarget::from(18..=65)),
//!     (Identifier::new("deleted_at"), oxide_sql_expr::ComparisonTarget::Null),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     render(&cond, &GenericDialect::new()).unwrap(),
//!     "(((age >= 18) AND (age <= 65)) AND (deleted_at IS NULL))"
//! );
//! ```
//!
//! ## Inversion
//!
//! ```rust
//! use oxide_sql_expr::builder::{col, BooleanCapable, Comparable};
//! use oxide_sql_expr::{render, GenericDialect};
//!
//! let cond = col("a").gt(1).unwrap().or(col("b").lt(2).unwrap()).unwrap();
//! let negated = cond.not().unwrap();
//!
//! assert_eq!(
//!     render(&negated, &GenericDialect::new()).unwrap(),
//!     "((a <= 1) AND (b >= 2))"
//! );
//! ```
//!
//! Every value is escaped by the dialect. [`LiteralString`] is the only
//! node copied into the output verbatim.

pub mod ast;
pub mod builder;
pub mod condition;
pub mod dialect;
pub mod error;
pub mod operator;
pub mod render;
pub mod value;

pub use ast::{
    AliasedExpression, BooleanExpression, CaseExpression, ColumnAll, ComplexExpression, Expr,
    Flavor, Function, Identifier, IrregularFunction, LiteralString, NumericExpression, Operand,
    OrderedExpression, QualifiedIdentifier, StringExpression, Subquery, Subscript,
};
pub use condition::{
    compile_match, invert, translate_pair, translate_pairs, translate_pairs_with,
    ComparisonTarget, Pattern,
};
pub use dialect::{Dialect, GenericDialect};
pub use error::{ExprError, Result};
pub use operator::{Arity, Operator};
pub use render::{render, ToSql};
pub use value::{SqlValue, ToSqlValue};
