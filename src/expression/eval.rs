use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Folds the tree from its leaves, ignoring the values stored on internal nodes.
    ///
    /// # Errors
    ///
    /// Returns `ExpressionError::Overflow` when an intermediate result does not fit in an `i64`.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        let result = fold(self);

        match &result {
            Ok(value) => debug!("Expression {} evaluated to: {}", self, value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }

    /// Checks that every internal node stores the value its children fold to.
    ///
    /// # Errors
    ///
    /// Returns `ExpressionError::InconsistentValue` for the first mismatching node
    /// (left subtree first), or `ExpressionError::Overflow`.
    pub fn verify(&self) -> Result<i64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Binary {
                value,
                op,
                left,
                right,
            } => {
                let l = left.verify()?;
                let r = right.verify()?;
                let computed = op.apply(l, r).ok_or(ExpressionError::Overflow)?;
                if computed != *value {
                    debug!("Node {} stores {} but folds to {}", self, value, computed);
                    return Err(ExpressionError::InconsistentValue {
                        stored: *value,
                        computed,
                    });
                }
                Ok(computed)
            }
        }
    }
}

fn fold(expr: &Expression) -> Result<i64, ExpressionError> {
    match expr {
        Expression::Number(n) => Ok(*n),
        Expression::Binary {
            op, left, right, ..
        } => {
            let l = fold(left)?;
            let r = fold(right)?;
            op.apply(l, r).ok_or(ExpressionError::Overflow)
        }
    }
}
