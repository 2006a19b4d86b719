//! Expression tree types.
//!
//! [`Expr`] is the node type every tree is made of. Complex expressions
//! come in three flavors ([`BooleanExpression`], [`NumericExpression`],
//! [`StringExpression`]) plus the untyped [`ComplexExpression`].
//! [`AliasedExpression`] and [`OrderedExpression`] are positional: they
//! render on their own but can never become an operand.

mod complex;
mod expression;
mod nodes;

pub use complex::{
    BooleanExpression, ComplexExpression, Flavor, NumericExpression, StringExpression,
};
pub use expression::{Expr, Identifier, LiteralString, Operand, Subquery};
pub use nodes::{
    AliasedExpression, CaseExpression, ColumnAll, Function, IrregularFunction,
    OrderedExpression, QualifiedIdentifier, Subscript,
};
