use std::fmt;
use std::str::FromStr;

use crate::expression::errors::ExpressionError;

/// Binary operators an expression can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// Applies the operator with overflow checking.
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = ExpressionError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            other => Err(ExpressionError::UnknownOperator(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::try_from(symbol),
            _ => Err(ExpressionError::UnknownOperator(s.to_string())),
        }
    }
}

/// An integer expression tree built from additions and subtractions.
///
/// Internal nodes carry the value they were constructed to evaluate to, so a
/// tree can be checked against an independent fold of its leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Binary {
        value: i64,
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Builds an internal node whose value is computed from its children.
    ///
    /// # Errors
    ///
    /// Returns `ExpressionError::Overflow` if the combined value does not fit in an `i64`.
    pub fn binary(
        op: Operator,
        left: Expression,
        right: Expression,
    ) -> Result<Self, ExpressionError> {
        let value = op
            .apply(left.value(), right.value())
            .ok_or(ExpressionError::Overflow)?;
        Ok(Expression::Binary {
            value,
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// The value recorded on this node at construction time
    pub fn value(&self) -> i64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Binary { value, .. } => *value,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Number(_) => None,
            Expression::Binary { op, .. } => Some(*op),
        }
    }

    pub fn children(&self) -> Option<(&Expression, &Expression)> {
        match self {
            Expression::Number(_) => None,
            Expression::Binary { left, right, .. } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Number(_))
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Binary { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn internal_count(&self) -> usize {
        match self {
            Expression::Number(_) => 0,
            Expression::Binary { left, right, .. } => {
                1 + left.internal_count() + right.internal_count()
            }
        }
    }

    /// Number of operator levels on the longest path to a leaf
    pub fn depth(&self) -> usize {
        match self {
            Expression::Number(_) => 0,
            Expression::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}
