use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::expression::{Expression, Operator};
use crate::generator::constants::{DEFAULT_MAX_OPERAND, DEFAULT_MIN_OPERAND};
use crate::generator::errors::GeneratorError;
use crate::generator::source::{DrawSource, RngSource};
use crate::generator::validation::{validate_count, validate_depth, validate_operand_range};

/// Builds expressions backward from a target value.
///
/// At every internal node one operand (the outer operand) is drawn from the
/// configured range and the other is derived so the node evaluates to its
/// target. Only outer operands are range-bound; derived operands may fall
/// anywhere, and their magnitude can grow with depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionGenerator {
    min_operand: i64,
    max_operand: i64,
}

impl ExpressionGenerator {
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidOperandRange` if `min_operand > max_operand`.
    pub fn new(min_operand: i64, max_operand: i64) -> Result<Self, GeneratorError> {
        validate_operand_range(min_operand, max_operand)?;
        Ok(Self {
            min_operand,
            max_operand,
        })
    }

    pub fn min_operand(&self) -> i64 {
        self.min_operand
    }

    pub fn max_operand(&self) -> i64 {
        self.max_operand
    }

    /// Generate an expression of exactly `depth` operator levels that evaluates to `target`.
    ///
    /// # Errors
    ///
    /// * `InvalidDepth` if `depth` is negative
    /// * `DepthTooLarge` if `depth` exceeds `MAX_DEPTH` (20), which would mean
    ///   more than 2^20 leaves
    /// * `Overflow` if a derived operand does not fit in an `i64`
    pub fn generate<R: Rng + ?Sized>(
        &self,
        target: i64,
        depth: i64,
        rng: &mut R,
    ) -> Result<Expression, GeneratorError> {
        self.generate_with(target, depth, &mut RngSource::new(rng))
    }

    /// Same as [`generate`](Self::generate), drawing from an arbitrary source.
    ///
    /// # Errors
    ///
    /// See [`generate`](Self::generate).
    pub fn generate_with<S: DrawSource + ?Sized>(
        &self,
        target: i64,
        depth: i64,
        source: &mut S,
    ) -> Result<Expression, GeneratorError> {
        let depth = validate_depth(depth)?;
        debug!(
            "Generating expression for target {} at depth {} with operands in [{}, {}]",
            target, depth, self.min_operand, self.max_operand
        );
        self.build(target, depth, source)
    }

    /// Generate `count` independent expressions for the same target and depth.
    /// Trees are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCount` for a zero count, plus any error from [`generate`](Self::generate).
    pub fn generate_many<R: Rng + ?Sized>(
        &self,
        target: i64,
        depth: i64,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Expression>, GeneratorError> {
        validate_count(count)?;
        validate_depth(depth)?;
        info!("Generating {} expressions for target {} at depth {}", count, target, depth);

        (0..count)
            .map(|_| self.generate(target, depth, &mut *rng))
            .collect()
    }

    /// Generate `count` expressions on the rayon pool.
    ///
    /// Tree `i` draws from its own `StdRng` seeded with `seed + i`, so the
    /// result is reproducible for a given seed regardless of scheduling.
    ///
    /// # Errors
    ///
    /// See [`generate_many`](Self::generate_many).
    pub fn generate_many_parallel(
        &self,
        target: i64,
        depth: i64,
        count: usize,
        seed: u64,
    ) -> Result<Vec<Expression>, GeneratorError> {
        validate_count(count)?;
        validate_depth(depth)?;
        info!(
            "Generating {} expressions in parallel for target {} at depth {} (seed {})",
            count, target, depth, seed
        );

        (0..count)
            .into_par_iter()
            .map(|index| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
                self.generate(target, depth, &mut rng)
            })
            .collect()
    }

    fn build<S: DrawSource + ?Sized>(
        &self,
        target: i64,
        depth: u32,
        source: &mut S,
    ) -> Result<Expression, GeneratorError> {
        if depth == 0 {
            return Ok(Expression::Number(target));
        }

        let op = source.next_operator();
        let outer = source.next_operand(self.min_operand, self.max_operand);
        let overflow = GeneratorError::Overflow {
            target,
            operand: outer,
        };

        // target = a + b with a drawn, or target = a - b with b drawn
        let (a, b) = match op {
            Operator::Add => (outer, target.checked_sub(outer).ok_or(overflow)?),
            Operator::Subtract => (target.checked_add(outer).ok_or(overflow)?, outer),
        };
        debug!("depth {}: {} = {} {} {}", depth, target, a, op, b);

        let left = self.build(a, depth - 1, source)?;
        let right = self.build(b, depth - 1, source)?;

        Ok(Expression::Binary {
            value: target,
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

impl Default for ExpressionGenerator {
    fn default() -> Self {
        Self {
            min_operand: DEFAULT_MIN_OPERAND,
            max_operand: DEFAULT_MAX_OPERAND,
        }
    }
}
