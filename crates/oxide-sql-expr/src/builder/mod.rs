//! Expression builder.
//!
//! Leaf constructors plus the capability traits that add operators and
//! decorations to the node types.
//!
//! # Example
//!
//! ```rust
//! use oxide_sql_expr::builder::{col, Aliasable, BooleanCapable, Comparable, NumericCapable};
//! use oxide_sql_expr::{render, GenericDialect};
//!
//! let total = col("price").mul(col("qty")).unwrap();
//! let expensive = total.clone().gt(100).unwrap().and(col("active")).unwrap();
//! let dialect = GenericDialect::new();
//!
//! assert_eq!(
//!     render(&expensive, &dialect).unwrap(),
//!     "(((price * qty) > 100) AND active)"
//! );
//! assert_eq!(
//!     render(&total.alias("total"), &dialect).unwrap(),
//!     "(price * qty) AS total"
//! );
//! ```

mod expr;
mod methods;

pub use expr::{case, col, column_all, func, list, lit, qualified, subquery, subscript, val};
pub use methods::{
    Aliasable, BooleanCapable, Castable, Comparable, Concatenable, NumericCapable, Orderable,
    Qualifiable, Reinterpretable, StringCapable,
};
