//! Derivata - random arithmetic expressions with a known answer
//!
//! Expressions are built backward from a target value using addition and
//! subtraction, so every generated tree evaluates to the requested target.
//! Trees can be printed as text or LaTeX, or drawn as tikz-qtree diagrams.

pub mod cli;
pub mod expression;
pub mod generator;
pub mod output;
pub mod tree;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use generator::{DrawSource, ExpressionGenerator, GeneratorError, RngSource};
pub use tree::{DocumentSpec, LabeledTree, render_document};

/// Generate an expression of the given depth that evaluates to `target`
///
/// This is a convenience function that uses the default operand range
/// (1 to 20) and the thread-local random number generator.
///
/// # Arguments
///
/// * `target` - The value the expression must evaluate to
/// * `depth` - Number of operation levels; 0 yields the bare number
///
/// # Errors
///
/// This function will return an error if:
/// * `depth` is negative or above the supported maximum
/// * A derived operand overflows `i64`
///
/// # Examples
///
/// ```
/// use derivata::generate_expression;
///
/// let expr = generate_expression(42, 3).expect("valid depth");
/// assert_eq!(expr.evaluate(), Ok(42));
/// assert_eq!(expr.leaf_count(), 8);
/// println!("{}", expr.render(false));
/// ```
pub fn generate_expression(target: i64, depth: i64) -> Result<Expression, GeneratorError> {
    ExpressionGenerator::default().generate(target, depth, &mut rand::thread_rng())
}
