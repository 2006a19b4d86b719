//! Capability traits.
//!
//! Each trait adds one family of decorating or combining methods. A node
//! type opts into the families that make sense for it; all methods take
//! the receiver by value and return a new node, leaving nothing mutated.
//!
//! | type                                   | capabilities                         |
//! |----------------------------------------|--------------------------------------|
//! | identifiers, literals, calls, CASE ... | all                                  |
//! | [`BooleanExpression`]                  | alias, cast, order, boolean          |
//! | [`NumericExpression`]                  | alias, cast, order, numeric, compare |
//! | [`StringExpression`]                   | alias, cast, order, string, compare  |
//! | [`ComplexExpression`], [`Expr`]        | alias, cast, order                   |

use crate::ast::{
    AliasedExpression, BooleanExpression, CaseExpression, ComplexExpression, Expr, Flavor,
    Function, Identifier, IrregularFunction, LiteralString, NumericExpression, OrderedExpression,
    QualifiedIdentifier, StringExpression, Subscript,
};
use crate::condition::{compile_match, invert, Pattern};
use crate::error::{ExprError, Result};
use crate::operator::Operator;

/// Fails with [`ExprError::FlavorMismatch`] if `operand` is a complex
/// expression of a flavor other than `expected`.
fn require_flavor(op: Operator, operand: &Expr, expected: Flavor) -> Result<()> {
    match operand.flavor() {
        Some(flavor) if flavor != expected => Err(ExprError::FlavorMismatch { op, expected }),
        _ => Ok(()),
    }
}

/// Naming an expression in a select list.
pub trait Aliasable: Into<Expr> + Sized {
    /// Returns `self AS name`.
    #[must_use]
    fn alias(self, name: impl Into<String>) -> AliasedExpression {
        AliasedExpression::new(self, name)
    }
}

/// Sorting by an expression.
pub trait Orderable: Into<Expr> + Sized {
    /// Returns `self ASC`.
    #[must_use]
    fn asc(self) -> OrderedExpression {
        OrderedExpression::new(self, false)
    }

    /// Returns `self DESC`.
    #[must_use]
    fn desc(self) -> OrderedExpression {
        OrderedExpression::new(self, true)
    }
}

/// Converting an expression to another SQL type.
pub trait Castable: Into<Expr> + Sized {
    /// Returns `cast(self AS sql_type)`.
    #[must_use]
    fn cast(self, sql_type: &str) -> IrregularFunction {
        IrregularFunction::new("cast", self, "AS", LiteralString::new(sql_type))
    }

    /// Casts to `sql_type` (`integer` when `None`) and treats the result as
    /// a number.
    #[must_use]
    fn cast_numeric(self, sql_type: Option<&str>) -> NumericExpression {
        NumericExpression::reinterpret(self.cast(sql_type.unwrap_or("integer")).into())
    }

    /// Casts to `sql_type` (`text` when `None`) and treats the result as
    /// text.
    #[must_use]
    fn cast_string(self, sql_type: Option<&str>) -> StringExpression {
        StringExpression::reinterpret(self.cast(sql_type.unwrap_or("text")).into())
    }
}

/// Qualifying a name with a table or schema.
pub trait Qualifiable: Into<Expr> + Sized {
    /// Returns `qualifier.self`.
    #[must_use]
    fn qualify(self, qualifier: impl Into<String>) -> QualifiedIdentifier {
        QualifiedIdentifier::new(qualifier, self)
    }
}

/// Use as a predicate.
pub trait BooleanCapable: Into<Expr> + Sized {
    /// Returns `(self AND other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::FlavorMismatch`] if `other` is a non-boolean
    /// complex expression.
    fn and(self, other: impl Into<Expr>) -> Result<BooleanExpression> {
        let other = other.into();
        require_flavor(Operator::And, &other, Flavor::Boolean)?;
        BooleanExpression::new(Operator::And, [self.into(), other])
    }

    /// Returns `(self OR other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::FlavorMismatch`] if `other` is a non-boolean
    /// complex expression.
    fn or(self, other: impl Into<Expr>) -> Result<BooleanExpression> {
        let other = other.into();
        require_flavor(Operator::Or, &other, Flavor::Boolean)?;
        BooleanExpression::new(Operator::Or, [self.into(), other])
    }

    /// Returns the logical complement of `self`, see [`invert`].
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::NotInvertible`] if `self` has no complement.
    fn not(self) -> Result<BooleanExpression> {
        invert(self)
    }
}

/// Use in arithmetic.
pub trait NumericCapable: Into<Expr> + Sized {
    /// Returns `(self + other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::FlavorMismatch`] if `other` is a non-numeric
    /// complex expression, or [`ExprError::BooleanContext`] if it is a
    /// boolean value.
    fn add(self, other: impl Into<Expr>) -> Result<NumericExpression> {
        arithmetic(Operator::Add, self.into(), other.into())
    }

    /// Returns `(self - other)`.
    ///
    /// # Errors
    ///
    /// See [`NumericCapable::add`].
    fn sub(self, other: impl Into<Expr>) -> Result<NumericExpression> {
        arithmetic(Operator::Sub, self.into(), other.into())
    }

    /// Returns `(self * other)`.
    ///
    /// # Errors
    ///
    /// See [`NumericCapable::add`].
    fn mul(self, other: impl Into<Expr>) -> Result<NumericExpression> {
        arithmetic(Operator::Mul, self.into(), other.into())
    }

    /// Returns `(self / other)`.
    ///
    /// # Errors
    ///
    /// See [`NumericCapable::add`].
    fn div(self, other: impl Into<Expr>) -> Result<NumericExpression> {
        arithmetic(Operator::Div, self.into(), other.into())
    }
}

fn arithmetic(op: Operator, left: Expr, right: Expr) -> Result<NumericExpression> {
    require_flavor(op, &right, Flavor::Numeric)?;
    NumericExpression::new(op, [left, right])
}

/// Ordering comparisons.
pub trait Comparable: Into<Expr> + Sized {
    /// Returns `(self < other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::BooleanContext`] if `other` is boolean.
    fn lt(self, other: impl Into<Expr>) -> Result<BooleanExpression> {
        inequality(Operator::Lt, self.into(), other.into())
    }

    /// Returns `(self > other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::BooleanContext`] if `other` is boolean.
    fn gt(self, other: impl Into<Expr>) -> Result<BooleanExpression> {
        inequality(Operator::Gt, self.into(), other.into())
    }

    /// Returns `(self <= other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::BooleanContext`] if `other` is boolean.
    fn lt_eq(self, other: impl Into<Expr>) -> Result<BooleanExpression> {
        inequality(Operator::LtEq, self.into(), other.into())
    }

    /// Returns `(self >= other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::BooleanContext`] if `other` is boolean.
    fn gt_eq(self, other: impl Into<Expr>) -> Result<BooleanExpression> {
        inequality(Operator::GtEq, self.into(), other.into())
    }
}

fn inequality(op: Operator, left: Expr, right: Expr) -> Result<BooleanExpression> {
    if right.is_boolean_context() {
        return Err(ExprError::BooleanContext { op });
    }
    BooleanExpression::new(op, [left, right])
}

/// Pattern matching on text.
pub trait StringCapable: Into<Expr> + Sized {
    /// Case-sensitive match against any of `patterns`, see
    /// [`compile_match`].
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::ArityMismatch`] if `patterns` is empty.
    fn like<I, P>(self, patterns: I) -> Result<BooleanExpression>
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        compile_match(self, patterns, false)
    }

    /// Case-insensitive match against any of `patterns`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::ArityMismatch`] if `patterns` is empty.
    fn ilike<I, P>(self, patterns: I) -> Result<BooleanExpression>
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        compile_match(self, patterns, true)
    }
}

/// String concatenation.
pub trait Concatenable: Into<Expr> + Sized {
    /// Returns `(self || other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::BooleanContext`] if `other` is boolean.
    fn concat(self, other: impl Into<Expr>) -> Result<StringExpression> {
        StringExpression::new(Operator::Concat, [self.into(), other.into()])
    }
}

/// Treating an untyped expression as a specific flavor.
pub trait Reinterpretable: Into<Expr> + Sized {
    /// Returns `self` as a predicate.
    #[must_use]
    fn sql_boolean(self) -> BooleanExpression {
        BooleanExpression::reinterpret(self.into())
    }

    /// Returns `self` as a number.
    #[must_use]
    fn sql_number(self) -> NumericExpression {
        NumericExpression::reinterpret(self.into())
    }

    /// Returns `self` as text.
    #[must_use]
    fn sql_string(self) -> StringExpression {
        StringExpression::reinterpret(self.into())
    }

    /// Returns `extract(part FROM self)` as a number.
    #[must_use]
    fn extract(self, part: &str) -> NumericExpression {
        NumericExpression::reinterpret(
            IrregularFunction::new("extract", LiteralString::new(part), "FROM", self).into(),
        )
    }
}

macro_rules! capabilities {
    ($($trait:ident),+ for $($ty:ty),+) => {
        capabilities!(@each [$($trait),+] $($ty),+);
    };
    (@each $traits:tt $($ty:ty),+) => {
        $(capabilities!(@one $traits $ty);)+
    };
    (@one [$($trait:ident),+] $ty:ty) => {
        $(impl $trait for $ty {})+
    };
}

capabilities!(
    Aliasable, Orderable, Castable, BooleanCapable, NumericCapable, Comparable, StringCapable,
    Reinterpretable
    for Identifier, LiteralString, QualifiedIdentifier, Function, IrregularFunction,
    CaseExpression, Subscript
);
capabilities!(Qualifiable for Identifier, LiteralString, QualifiedIdentifier);
capabilities!(Aliasable, Orderable, Castable for Expr, ComplexExpression);
capabilities!(Aliasable, Orderable, Castable, BooleanCapable for BooleanExpression);
capabilities!(Aliasable, Orderable, Castable, NumericCapable, Comparable for NumericExpression);
capabilities!(
    Aliasable, Orderable, Castable, StringCapable, Concatenable, Comparable for StringExpression
);

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Identifier {
        Identifier::new("x")
    }

    #[test]
    fn test_boolean_combination() {
        let both = x().and(Identifier::new("y")).unwrap();
        assert_eq!(both.op(), Operator::And);

        let sum = x().add(1).unwrap();
        assert_eq!(
            x().or(sum).unwrap_err(),
            ExprError::FlavorMismatch {
                op: Operator::Or,
                expected: Flavor::Boolean
            }
        );
    }

    #[test]
    fn test_arithmetic_rejects_other_flavors() {
        let predicate = x().gt(1).unwrap();
        assert_eq!(
            x().add(predicate).unwrap_err(),
            ExprError::FlavorMismatch {
                op: Operator::Add,
                expected: Flavor::Numeric
            }
        );
        assert_eq!(
            x().mul(true).unwrap_err(),
            ExprError::BooleanContext { op: Operator::Mul }
        );
    }

    #[test]
    fn test_chained_arithmetic() {
        let total = x().add(1).unwrap().mul(Identifier::new("y")).unwrap();
        assert_eq!(total.op(), Operator::Mul);
        assert!(total.gt(100).is_ok());
    }

    #[test]
    fn test_inequality_rejects_boolean() {
        assert_eq!(
            x().lt(Expr::null()).unwrap_err(),
            ExprError::BooleanContext { op: Operator::Lt }
        );
        let predicate = x().gt(1).unwrap();
        assert!(matches!(
            Identifier::new("y").gt_eq(predicate),
            Err(ExprError::BooleanContext { .. })
        ));
    }

    #[test]
    fn test_reinterpretation() {
        assert_eq!(x().sql_boolean().op(), Operator::Noop);
        assert_eq!(x().sql_number().as_ref().flavor(), Flavor::Numeric);
        assert_eq!(x().sql_string().as_ref().flavor(), Flavor::String);
        assert_eq!(x().extract("year").as_ref().flavor(), Flavor::Numeric);
    }

    #[test]
    fn test_casts() {
        assert_eq!(x().cast("date").name(), "cast");
        assert_eq!(x().cast_numeric(None).op(), Operator::Noop);
        assert!(x().cast_string(Some("varchar(10)")).concat("!").is_ok());
    }

    #[test]
    fn test_decorations_do_not_consume_shared_nodes() {
        let column = x();
        let aliased = column.clone().alias("y");
        let ordered = column.clone().desc();
        assert_eq!(aliased.expression(), &Expr::from(column.clone()));
        assert_eq!(ordered.expression(), &Expr::from(column));
    }

    #[test]
    fn test_not_inverts() {
        let predicate = x().gt(1).unwrap();
        assert_eq!(predicate.not().unwrap().op(), Operator::LtEq);
        assert_eq!(x().not().unwrap().op(), Operator::Not);
    }
}
