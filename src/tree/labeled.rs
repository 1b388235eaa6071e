use log::debug;

use crate::expression::{Expression, ExpressionError, Operator};

/// A tree of string labels with ordered children.
///
/// This is the shape the visual renderer works with: it knows nothing about
/// arithmetic, only labels and nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledTree {
    pub label: String,
    pub children: Vec<LabeledTree>,
}

impl LabeledTree {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn node(label: impl Into<String>, children: Vec<LabeledTree>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn size(&self) -> usize {
        1 + self.children.iter().map(LabeledTree::size).sum::<usize>()
    }
}

impl From<&Expression> for LabeledTree {
    fn from(expr: &Expression) -> Self {
        match expr {
            Expression::Number(n) => LabeledTree::leaf(n.to_string()),
            Expression::Binary {
                op, left, right, ..
            } => LabeledTree::node(
                op.symbol().to_string(),
                vec![LabeledTree::from(left.as_ref()), LabeledTree::from(right.as_ref())],
            ),
        }
    }
}

impl TryFrom<&LabeledTree> for Expression {
    type Error = ExpressionError;

    /// Rebuilds an expression from labels alone, recomputing every internal value.
    fn try_from(tree: &LabeledTree) -> Result<Self, Self::Error> {
        if tree.is_leaf() {
            return tree
                .label
                .parse::<i64>()
                .map(Expression::Number)
                .map_err(|_| {
                    debug!("Rejecting leaf label '{}'", tree.label);
                    ExpressionError::InvalidLeafLabel(tree.label.clone())
                });
        }

        let op: Operator = tree.label.parse()?;
        match tree.children.as_slice() {
            [left, right] => Expression::binary(
                op,
                Expression::try_from(left)?,
                Expression::try_from(right)?,
            ),
            other => Err(ExpressionError::InvalidArity {
                label: tree.label.clone(),
                children: other.len(),
            }),
        }
    }
}
