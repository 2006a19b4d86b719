//! Logical inversion of predicates.

use tracing::debug;

use crate::ast::{BooleanExpression, ComplexExpression, Expr, Flavor};
use crate::error::{ExprError, Result};
use crate::operator::Operator;

/// Returns the logical complement of `expr`.
///
/// - AND/OR: every operand is inverted and the combinator swapped
///   (De Morgan).
/// - Any other boolean operator is replaced by its inverse; the operands
///   are kept.
/// - A value that is not a complex expression, such as a column used as a
///   predicate, is wrapped in NOT.
///
/// # Errors
///
/// Returns [`ExprError::NotInvertible`] for a numeric, string or untyped
/// complex expression, or for a boolean expression whose operator has no
/// inverse.
pub fn invert(expr: impl Into<Expr>) -> Result<BooleanExpression> {
    match expr.into() {
        Expr::Complex(complex) => invert_complex(complex),
        other => BooleanExpression::new(Operator::Not, [other]),
    }
}

fn invert_complex(complex: ComplexExpression) -> Result<BooleanExpression> {
    let op = complex.op();
    if complex.flavor() != Flavor::Boolean {
        debug!(op = %op, flavor = %complex.flavor(), "cannot invert non-boolean expression");
        return Err(ExprError::NotInvertible { op });
    }
    let Some(inverse) = op.inverse() else {
        debug!(op = %op, "operator has no inverse");
        return Err(ExprError::NotInvertible { op });
    };

    let (_, args) = complex.into_parts();
    match op {
        Operator::And | Operator::Or => {
            let inverted = args
                .into_iter()
                .map(invert)
                .collect::<Result<Vec<_>>>()?;
            BooleanExpression::new(inverse, inverted)
        }
        _ => BooleanExpression::new(inverse, args),
    }
}
