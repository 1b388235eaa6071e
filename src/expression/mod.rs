//! Expression tree and its evaluation and rendering

mod ast;
mod display;
mod errors;
mod eval;
mod latex;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
