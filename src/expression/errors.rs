use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Integer overflow while combining operands")]
    Overflow,
    #[error("Leaf label is not an integer: {0}")]
    InvalidLeafLabel(String),
    #[error("Operator node '{label}' must have exactly two children, found {children}")]
    InvalidArity { label: String, children: usize },
    #[error("Stored value {stored} does not match computed value {computed}")]
    InconsistentValue { stored: i64, computed: i64 },
}
