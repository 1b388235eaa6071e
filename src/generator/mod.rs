pub mod constants;
mod core;
mod errors;
mod source;
mod validation;

pub use core::ExpressionGenerator;
pub use errors::GeneratorError;
pub use source::{DrawSource, RngSource};
pub use validation::{validate_count, validate_depth, validate_operand_range};

#[cfg(test)]
mod tests;
