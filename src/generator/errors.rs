use thiserror::Error;

use crate::generator::constants::MAX_DEPTH;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Depth must be non-negative, got {0}")]
    InvalidDepth(i64),
    #[error("Depth {depth} exceeds the maximum of {max}", max = MAX_DEPTH)]
    DepthTooLarge { depth: i64 },
    #[error("Invalid operand range: min {min} is greater than max {max}")]
    InvalidOperandRange { min: i64, max: i64 },
    #[error("Expression count must be at least 1")]
    InvalidCount,
    #[error("Derived operand overflows for target {target} and operand {operand}")]
    Overflow { target: i64, operand: i64 },
}
