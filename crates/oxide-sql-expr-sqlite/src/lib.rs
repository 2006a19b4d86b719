//! # oxide-sql-expr-sqlite
//!
//! SQLite rendering for `oxide-sql-expr` expression trees.
//!
//! # How SQLite differs from the generic dialect
//!
//! - **Identifier quoting**: identifiers are always double-quoted, so
//!   keywords can be used as column names. See [SQLite keywords].
//! - **Booleans**: SQLite has no boolean type; `TRUE`/`FALSE` render as
//!   `1`/`0`.
//! - **[LIKE]**: SQLite's `LIKE` is already case-insensitive for ASCII,
//!   and there is no `ILIKE`. Case-insensitive matches render as `LIKE`.
//! - **[REGEXP]**: regular-expression matches render with the `REGEXP`
//!   operator. SQLite only provides the syntax; the application must
//!   register a `regexp()` function. Case-insensitive matches prefix the
//!   pattern with the `(?i)` inline flag.
//!
//! [SQLite keywords]: https://www.sqlite.org/lang_keywords.html
//! [LIKE]: https://www.sqlite.org/lang_expr.html#like
//! [REGEXP]: https://www.sqlite.org/lang_expr.html#regexp
//!
//! ## Example
//!
//! ```rust
//! use oxide_sql_expr::builder::{col, StringCapable};
//! use oxide_sql_expr::render;
//! use oxide_sql_expr_sqlite::SqliteDialect;
//!
//! let cond = col("name").ilike(["al%"]).unwrap();
//! assert_eq!(
//!     render(&cond, &SqliteDialect::new()).unwrap(),
//!     "(\"name\" LIKE 'al%')"
//! );
//! ```

mod dialect;

pub use dialect::SqliteDialect;
