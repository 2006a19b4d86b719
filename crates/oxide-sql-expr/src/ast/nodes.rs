//! Leaf and decorator nodes.

use tracing::debug;

use super::expression::{Expr, Identifier, LiteralString};
use crate::error::{ExprError, Result};

/// An expression given a name in a select list: `expr AS alias`.
///
/// Only valid where the grammar expects an alias; it cannot be an operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AliasedExpression {
    expression: Expr,
    alias: String,
}

impl AliasedExpression {
    /// Creates a new aliased expression.
    #[must_use]
    pub fn new(expression: impl Into<Expr>, alias: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            alias: alias.into(),
        }
    }

    /// Returns the aliased expression.
    #[must_use]
    pub const fn expression(&self) -> &Expr {
        &self.expression
    }

    /// Returns the alias.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }
}

/// An expression to sort by: `expr ASC` or `expr DESC`.
///
/// Only valid in an ORDER BY list; it cannot be an operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedExpression {
    expression: Expr,
    descending: bool,
}

impl OrderedExpression {
    /// Creates a new ordered expression.
    #[must_use]
    pub fn new(expression: impl Into<Expr>, descending: bool) -> Self {
        Self {
            expression: expression.into(),
            descending,
        }
    }

    /// Returns the expression being sorted on.
    #[must_use]
    pub const fn expression(&self) -> &Expr {
        &self.expression
    }

    /// Returns whether the sort is descending.
    #[must_use]
    pub const fn descending(&self) -> bool {
        self.descending
    }

    /// Returns the same expression sorted in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            expression: self.expression.clone(),
            descending: !self.descending,
        }
    }
}

/// A name qualified by a table or schema: `qualifier.name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedIdentifier {
    qualifier: String,
    name: Box<Expr>,
}

impl QualifiedIdentifier {
    /// Qualifies `name` with `qualifier`.
    #[must_use]
    pub fn new(qualifier: impl Into<String>, name: impl Into<Expr>) -> Self {
        Self {
            qualifier: qualifier.into(),
            name: Box::new(name.into()),
        }
    }

    /// Creates a `table.column` reference.
    #[must_use]
    pub fn column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(table, Identifier::new(column))
    }

    /// Returns the qualifier.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// Returns the qualified name.
    #[must_use]
    pub fn name(&self) -> &Expr {
        &self.name
    }
}

/// All columns of a table: `table.*`.
///
/// Two values are equal iff they name the same table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnAll {
    table: String,
}

impl ColumnAll {
    /// Creates a new `table.*` reference.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }
}

/// A function call.
///
/// Two calls are equal iff they have the same name and arguments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    name: String,
    args: Vec<Expr>,
}

impl Function {
    /// Creates a call of `name` with `args`.
    #[must_use]
    pub fn new<I, A>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arguments.
    #[must_use]
    pub fn args(&self) -> &[Expr] {
        &self.args
    }
}

/// A call whose two arguments are separated by a keyword instead of a
/// comma, such as `cast(x AS integer)` or `extract(year FROM d)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrregularFunction {
    name: String,
    arg1: Box<Expr>,
    joiner: LiteralString,
    arg2: Box<Expr>,
}

impl IrregularFunction {
    /// Creates a new irregular function call.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        arg1: impl Into<Expr>,
        joiner: impl Into<String>,
        arg2: impl Into<Expr>,
    ) -> Self {
        Self {
            name: name.into(),
            arg1: Box::new(arg1.into()),
            joiner: LiteralString::new(joiner),
            arg2: Box::new(arg2.into()),
        }
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first argument.
    #[must_use]
    pub fn arg1(&self) -> &Expr {
        &self.arg1
    }

    /// Returns the keyword placed between the arguments.
    #[must_use]
    pub fn joiner(&self) -> &str {
        self.joiner.as_str()
    }

    /// Returns the second argument.
    #[must_use]
    pub fn arg2(&self) -> &Expr {
        &self.arg2
    }
}

/// A searched CASE expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCaseExpression"))]
pub struct CaseExpression {
    conditions: Vec<(Expr, Expr)>,
    default: Box<Expr>,
}

impl CaseExpression {
    /// Creates a CASE expression from (condition, result) pairs and the
    /// result used when no condition holds.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::MalformedCaseConditions`] if `conditions` is
    /// empty.
    pub fn new<I, C, R>(conditions: I, default: impl Into<Expr>) -> Result<Self>
    where
        I: IntoIterator<Item = (C, R)>,
        C: Into<Expr>,
        R: Into<Expr>,
    {
        let conditions: Vec<(Expr, Expr)> = conditions
            .into_iter()
            .map(|(condition, result)| (condition.into(), result.into()))
            .collect();
        if conditions.is_empty() {
            debug!("CASE expression without conditions rejected");
            return Err(ExprError::MalformedCaseConditions);
        }
        Ok(Self {
            conditions,
            default: Box::new(default.into()),
        })
    }

    /// Creates a CASE expression from a flat list that must consist of
    /// two-element lists, each a (condition, result) pair.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::MalformedCaseConditions`] if the list is empty
    /// or any entry is not a two-element [`Expr::List`].
    pub fn from_list(conditions: Vec<Expr>, default: impl Into<Expr>) -> Result<Self> {
        let pairs = conditions
            .into_iter()
            .map(|entry| match entry {
                Expr::List(pair) => <[Expr; 2]>::try_from(pair)
                    .map(|[condition, result]| (condition, result))
                    .map_err(|_| ExprError::MalformedCaseConditions),
                _ => Err(ExprError::MalformedCaseConditions),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(pairs, default)
    }

    /// Returns the (condition, result) pairs.
    #[must_use]
    pub fn conditions(&self) -> &[(Expr, Expr)] {
        &self.conditions
    }

    /// Returns the default result.
    #[must_use]
    pub fn default(&self) -> &Expr {
        &self.default
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCaseExpression {
    conditions: Vec<(Expr, Expr)>,
    default: Expr,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCaseExpression> for CaseExpression {
    type Error = ExprError;

    fn try_from(raw: RawCaseExpression) -> Result<Self> {
        Self::new(raw.conditions, raw.default)
    }
}

/// Array element access: `base[i, ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subscript {
    base: Box<Expr>,
    indices: Vec<Expr>,
}

impl Subscript {
    /// Creates a subscript of `base`.
    #[must_use]
    pub fn new<I, A>(base: impl Into<Expr>, indices: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        Self {
            base: Box::new(base.into()),
            indices: indices.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new subscript with `indices` appended to this one's.
    #[must_use]
    pub fn append<I, A>(&self, indices: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        let mut all = self.indices.clone();
        all.extend(indices.into_iter().map(Into::into));
        Self {
            base: self.base.clone(),
            indices: all,
        }
    }

    /// Returns the subscripted expression.
    #[must_use]
    pub fn base(&self) -> &Expr {
        &self.base
    }

    /// Returns the indices.
    #[must_use]
    pub fn indices(&self) -> &[Expr] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_all_equality() {
        assert_eq!(ColumnAll::new("items"), ColumnAll::new("items"));
        assert_ne!(ColumnAll::new("items"), ColumnAll::new("orders"));
    }

    #[test]
    fn test_function_equality() {
        let a = Function::new("coalesce", [Expr::from(Identifier::new("x")), Expr::from(0)]);
        let b = Function::new("coalesce", [Expr::from(Identifier::new("x")), Expr::from(0)]);
        let c = Function::new("coalesce", [Expr::from(Identifier::new("y")), Expr::from(0)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Function::new("ifnull", a.args().to_vec()));
    }

    #[test]
    fn test_case_requires_conditions() {
        let err = CaseExpression::new(Vec::<(Expr, Expr)>::new(), 0).unwrap_err();
        assert_eq!(err, ExprError::MalformedCaseConditions);
    }

    #[test]
    fn test_case_from_list() {
        let ok = CaseExpression::from_list(
            vec![Expr::list([Expr::from(Identifier::new("a")), Expr::from(1)])],
            0,
        )
        .unwrap();
        assert_eq!(ok.conditions().len(), 1);

        let err = CaseExpression::from_list(vec![Expr::list([1, 2, 3])], 0).unwrap_err();
        assert_eq!(err, ExprError::MalformedCaseConditions);

        let err = CaseExpression::from_list(vec![Expr::from(1)], 0).unwrap_err();
        assert_eq!(err, ExprError::MalformedCaseConditions);
    }

    #[test]
    fn test_subscript_append_leaves_original() {
        let sub = Subscript::new(Identifier::new("arr"), [1]);
        let longer = sub.append([2, 3]);
        assert_eq!(sub.indices().len(), 1);
        assert_eq!(longer.indices().len(), 3);
        assert_eq!(longer.base(), sub.base());
    }

    #[test]
    fn test_ordered_reversed() {
        let ordered = OrderedExpression::new(Identifier::new("id"), true);
        assert!(!ordered.reversed().descending());
        assert!(ordered.descending());
    }
}
