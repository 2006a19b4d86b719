//! Complex expressions: an operator applied to one or more operands.

use core::fmt;

use tracing::debug;

use super::expression::{Expr, Operand};
use crate::error::{ExprError, Result};
use crate::operator::Operator;

/// The SQL context a complex expression's result may appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flavor {
    /// No declared result type.
    Generic,
    /// Usable wherever a predicate is expected.
    Boolean,
    /// Usable wherever a number is expected.
    Numeric,
    /// Usable wherever text is expected.
    String,
}

impl Flavor {
    /// Returns whether expressions of this flavor refuse boolean operands.
    #[must_use]
    pub const fn rejects_boolean_input(self) -> bool {
        matches!(self, Self::Numeric | Self::String)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "generic",
            Self::Boolean => "boolean",
            Self::Numeric => "numeric",
            Self::String => "string",
        })
    }
}

/// An operator together with its operands.
///
/// The operator and arguments are fixed at construction. Construction
/// validates the argument count against the operator's arity class and,
/// for numeric and string expressions, rejects boolean operands.
/// Deserialization runs the same checks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawComplexExpression"))]
pub struct ComplexExpression {
    op: Operator,
    args: Vec<Expr>,
    flavor: Flavor,
}

impl ComplexExpression {
    /// Creates an untyped complex expression.
    ///
    /// Operands built with [`Operand::pairs`] are translated into a boolean
    /// conjunction before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::ArityMismatch`] if the number of arguments does
    /// not fit the operator.
    pub fn new<I, A>(op: Operator, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Operand>,
    {
        Self::build(Flavor::Generic, op, args)
    }

    /// Creates a complex expression from a textual operator symbol.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::UnknownOperator`] for a symbol outside the
    /// catalog, and any error [`ComplexExpression::new`] returns.
    pub fn from_symbol<I, A>(symbol: &str, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Operand>,
    {
        Self::new(symbol.parse()?, args)
    }

    pub(crate) fn build<I, A>(flavor: Flavor, op: Operator, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Operand>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.into().expand())
            .collect::<Result<Vec<Expr>>>()?;

        let arity = op.arity();
        if !arity.accepts(args.len()) {
            debug!(op = %op, given = args.len(), "arity mismatch");
            return Err(ExprError::ArityMismatch {
                op,
                arity,
                given: args.len(),
            });
        }

        if flavor.rejects_boolean_input() && args.iter().any(Expr::is_boolean_context) {
            debug!(op = %op, %flavor, "boolean operand rejected");
            return Err(ExprError::BooleanContext { op });
        }

        Ok(Self { op, args, flavor })
    }

    /// Wraps a single expression in a no-op of the given flavor.
    ///
    /// Only used for operands that are never boolean, so no validation
    /// is needed.
    pub(crate) fn reinterpret(flavor: Flavor, expr: Expr) -> Self {
        Self {
            op: Operator::Noop,
            args: vec![expr],
            flavor,
        }
    }

    /// Returns the operator.
    #[must_use]
    pub const fn op(&self) -> Operator {
        self.op
    }

    /// Returns the operands.
    #[must_use]
    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    /// Returns the flavor of the expression's result.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Consumes the expression, returning its operator and operands.
    #[must_use]
    pub fn into_parts(self) -> (Operator, Vec<Expr>) {
        (self.op, self.args)
    }
}

/// Unvalidated form of a [`ComplexExpression`], as read by serde.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawComplexExpression {
    op: Operator,
    args: Vec<Expr>,
    flavor: Flavor,
}

#[cfg(feature = "serde")]
impl TryFrom<RawComplexExpression> for ComplexExpression {
    type Error = ExprError;

    fn try_from(raw: RawComplexExpression) -> Result<Self> {
        Self::build(raw.flavor, raw.op, raw.args)
    }
}

macro_rules! flavored_expression {
    ($(#[$doc:meta])* $name:ident, $flavor:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "ComplexExpression"))]
        pub struct $name(ComplexExpression);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "`.")]
            ///
            /// # Errors
            ///
            /// Returns [`ExprError::ArityMismatch`] if the number of
            /// arguments does not fit the operator, or
            /// [`ExprError::BooleanContext`] if the flavor forbids a
            /// boolean operand that was supplied.
            pub fn new<I, A>(op: Operator, args: I) -> Result<Self>
            where
                I: IntoIterator<Item = A>,
                A: Into<Operand>,
            {
                ComplexExpression::build(Flavor::$flavor, op, args).map(Self)
            }

            pub(crate) fn reinterpret(expr: Expr) -> Self {
                Self(ComplexExpression::reinterpret(Flavor::$flavor, expr))
            }

            /// Returns the operator.
            #[must_use]
            pub const fn op(&self) -> Operator {
                self.0.op
            }

            /// Returns the operands.
            #[must_use]
            pub fn args(&self) -> &[Expr] {
                &self.0.args
            }

            /// Returns the underlying complex expression.
            #[must_use]
            pub fn into_inner(self) -> ComplexExpression {
                self.0
            }
        }

        impl AsRef<ComplexExpression> for $name {
            fn as_ref(&self) -> &ComplexExpression {
                &self.0
            }
        }

        impl From<$name> for ComplexExpression {
            fn from(expr: $name) -> Self {
                expr.0
            }
        }

        impl TryFrom<ComplexExpression> for $name {
            type Error = ExprError;

            fn try_from(expr: ComplexExpression) -> Result<Self> {
                if expr.flavor != Flavor::$flavor {
                    debug!(op = %expr.op, flavor = %expr.flavor, "flavor mismatch");
                    return Err(ExprError::FlavorMismatch {
                        op: expr.op,
                        expected: Flavor::$flavor,
                    });
                }
                Ok(Self(expr))
            }
        }

        impl From<$name> for Expr {
            fn from(expr: $name) -> Self {
                Self::Complex(expr.0)
            }
        }
    };
}

flavored_expression!(
    /// A complex expression whose result is a predicate.
    BooleanExpression,
    Boolean
);

flavored_expression!(
    /// A complex expression whose result is a number.
    NumericExpression,
    Numeric
);

flavored_expression!(
    /// A complex expression whose result is text.
    StringExpression,
    String
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Identifier;
    use crate::operator::Arity;

    fn x() -> Expr {
        Identifier::new("x").into()
    }

    #[test]
    fn test_construction_keeps_operator_and_args() {
        let expr = ComplexExpression::new(Operator::Add, [x(), Expr::from(1)]).unwrap();
        assert_eq!(expr.op(), Operator::Add);
        assert_eq!(expr.args().len(), 2);
        assert_eq!(expr.flavor(), Flavor::Generic);
    }

    #[test]
    fn test_arity_mismatch() {
        let err = ComplexExpression::new(Operator::And, Vec::<Expr>::new()).unwrap_err();
        assert_eq!(
            err,
            ExprError::ArityMismatch {
                op: Operator::And,
                arity: Arity::Variadic,
                given: 0
            }
        );

        let err = BooleanExpression::new(Operator::Eq, [x()]).unwrap_err();
        assert!(matches!(err, ExprError::ArityMismatch { given: 1, .. }));

        let err = BooleanExpression::new(Operator::Not, [x(), x()]).unwrap_err();
        assert!(matches!(err, ExprError::ArityMismatch { given: 2, .. }));
    }

    #[test]
    fn test_unknown_symbol() {
        let err = ComplexExpression::from_symbol("<=>", [x(), x()]).unwrap_err();
        assert_eq!(err, ExprError::UnknownOperator(String::from("<=>")));
    }

    #[test]
    fn test_numeric_rejects_boolean_operand() {
        let predicate = BooleanExpression::new(Operator::Eq, [x(), Expr::from(1)]).unwrap();
        let err =
            NumericExpression::new(Operator::Add, [Expr::from(predicate), Expr::from(1)])
                .unwrap_err();
        assert_eq!(err, ExprError::BooleanContext { op: Operator::Add });

        let err = StringExpression::new(Operator::Concat, [x(), Expr::from(true)]).unwrap_err();
        assert_eq!(err, ExprError::BooleanContext { op: Operator::Concat });
    }

    #[test]
    fn test_boolean_accepts_boolean_operand() {
        let expr = BooleanExpression::new(Operator::And, [x(), Expr::from(true)]).unwrap();
        assert_eq!(expr.as_ref().flavor(), Flavor::Boolean);
    }

    #[test]
    fn test_pairs_operand_expands_to_conjunction() {
        let expr = ComplexExpression::new(
            Operator::And,
            [
                Operand::pairs([(Identifier::new("a"), 1), (Identifier::new("b"), 2)]),
                Operand::from(x()),
            ],
        )
        .unwrap();
        match &expr.args()[0] {
            Expr::Complex(inner) => {
                assert_eq!(inner.op(), Operator::And);
                assert_eq!(inner.flavor(), Flavor::Boolean);
            }
            other => panic!("expected a conjunction, got {other:?}"),
        }
    }

    #[test]
    fn test_flavored_from_complex() {
        let sum = NumericExpression::new(Operator::Add, [x(), Expr::from(1)]).unwrap();
        let complex = ComplexExpression::from(sum.clone());
        assert_eq!(NumericExpression::try_from(complex.clone()), Ok(sum));
        assert_eq!(
            BooleanExpression::try_from(complex),
            Err(ExprError::FlavorMismatch {
                op: Operator::Add,
                expected: Flavor::Boolean
            })
        );
    }

    #[test]
    fn test_pairs_operand_is_boolean_for_numeric() {
        let err = NumericExpression::new(
            Operator::Mul,
            [Operand::pairs([(Identifier::new("a"), 1)]), Operand::from(x())],
        )
        .unwrap_err();
        assert_eq!(err, ExprError::BooleanContext { op: Operator::Mul });
    }
}
