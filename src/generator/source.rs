use rand::Rng;

use crate::expression::Operator;

/// Supplies the random choices the generator makes at each internal node.
pub trait DrawSource {
    /// Picks Add or Subtract with equal probability.
    fn next_operator(&mut self) -> Operator;

    /// Draws an operand uniformly from the closed range `[min, max]`.
    /// Callers guarantee `min <= max`.
    fn next_operand(&mut self, min: i64, max: i64) -> i64;
}

/// Adapts any `rand::Rng` into a `DrawSource`
pub struct RngSource<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RngSource<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> DrawSource for RngSource<'_, R> {
    fn next_operator(&mut self) -> Operator {
        if self.rng.gen_bool(0.5) {
            Operator::Add
        } else {
            Operator::Subtract
        }
    }

    fn next_operand(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }
}
