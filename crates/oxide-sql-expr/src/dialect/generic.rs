//! Generic SQL dialect.

use super::Dialect;

/// A generic SQL dialect using ANSI SQL with PostgreSQL operators for
/// `ILIKE` and regular-expression matching.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect {
    quote_identifiers: bool,
}

impl GenericDialect {
    /// Creates a new generic dialect that leaves identifiers unquoted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quote_identifiers: false,
        }
    }

    /// Sets whether identifiers are double-quoted.
    #[must_use]
    pub const fn with_quoted_identifiers(mut self, quote: bool) -> Self {
        self.quote_identifiers = quote;
        self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn quote_identifiers(&self) -> bool {
        self.quote_identifiers
    }
}
