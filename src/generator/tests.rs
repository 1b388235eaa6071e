use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::expression::{Expression, Operator};
use crate::generator::{
    DrawSource, ExpressionGenerator, GeneratorError, validate_count, validate_depth,
    validate_operand_range,
};

/// Replays a fixed list of (operator, operand) choices, one pair per internal node
struct ScriptedSource {
    draws: VecDeque<(Operator, i64)>,
    pending_operand: Option<i64>,
    operand_requests: usize,
}

impl ScriptedSource {
    fn new(draws: &[(Operator, i64)]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            pending_operand: None,
            operand_requests: 0,
        }
    }
}

impl DrawSource for ScriptedSource {
    fn next_operator(&mut self) -> Operator {
        let (op, operand) = self.draws.pop_front().unwrap_or((Operator::Add, 0));
        self.pending_operand = Some(operand);
        op
    }

    fn next_operand(&mut self, min: i64, max: i64) -> i64 {
        self.operand_requests += 1;
        let operand = self.pending_operand.take().unwrap_or(min);
        assert!((min..=max).contains(&operand), "scripted operand out of range");
        operand
    }
}

/// Counts draws while delegating to a seeded rng
struct CountingSource {
    rng: StdRng,
    operators: usize,
    operands: usize,
}

impl DrawSource for CountingSource {
    fn next_operator(&mut self) -> Operator {
        self.operators += 1;
        crate::generator::RngSource::new(&mut self.rng).next_operator()
    }

    fn next_operand(&mut self, min: i64, max: i64) -> i64 {
        self.operands += 1;
        crate::generator::RngSource::new(&mut self.rng).next_operand(min, max)
    }
}

fn outer_operands(expr: &Expression, out: &mut Vec<i64>) {
    if let Expression::Binary {
        op, left, right, ..
    } = expr
    {
        match op {
            Operator::Add => out.push(left.value()),
            Operator::Subtract => out.push(right.value()),
        }
        outer_operands(left, out);
        outer_operands(right, out);
    }
}

#[test]
fn test_generate_evaluates_to_target() {
    let generator = ExpressionGenerator::default();
    let mut rng = StdRng::seed_from_u64(7);
    for target in [-50, -1, 0, 1, 10, 42, 100, 9_999] {
        for depth in 0..=6 {
            let result = generator.generate(target, depth, &mut rng);
            assert!(result.is_ok());
            if let Ok(expr) = result {
                assert_eq!(expr.evaluate(), Ok(target));
                assert_eq!(expr.verify(), Ok(target));
                assert_eq!(expr.value(), target);
            }
        }
    }
}

#[test]
fn test_generate_is_perfectly_balanced() {
    let generator = ExpressionGenerator::default();
    let mut rng = StdRng::seed_from_u64(11);
    for depth in 0..=8u32 {
        let result = generator.generate(42, i64::from(depth), &mut rng);
        assert!(result.is_ok());
        if let Ok(expr) = result {
            assert_eq!(expr.leaf_count(), 1usize << depth);
            assert_eq!(expr.internal_count(), (1usize << depth) - 1);
            assert_eq!(expr.depth(), depth as usize);
        }
    }
}

#[test]
fn test_depth_zero_is_single_leaf() {
    let generator = ExpressionGenerator::default();
    let mut rng = StdRng::seed_from_u64(0);
    let result = generator.generate(-37, 0, &mut rng);
    assert_eq!(result, Ok(Expression::Number(-37)));
    if let Ok(expr) = result {
        assert_eq!(expr.render(true), "-37");
        assert_eq!(expr.render(false), "-37");
    }
}

#[test]
fn test_scripted_draws_build_expected_tree() {
    let generator = ExpressionGenerator::default();
    let mut source = ScriptedSource::new(&[
        (Operator::Add, 5),
        (Operator::Subtract, 2),
        (Operator::Add, 3),
    ]);
    let result = generator.generate_with(10, 2, &mut source);
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.render(true), "((7 - 2) + (3 + 2))");
        assert_eq!(expr.evaluate(), Ok(10));
    }
    assert!(source.draws.is_empty());
    assert_eq!(source.operand_requests, 3);
}

#[test]
fn test_subtract_draws_right_operand() {
    let generator = ExpressionGenerator::default();
    let mut source = ScriptedSource::new(&[(Operator::Subtract, 4)]);
    let result = generator.generate_with(10, 1, &mut source);
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.render(false), "14 - 4");
    }
}

#[test]
fn test_same_seed_reproduces_tree() {
    let generator = ExpressionGenerator::default();
    let first = generator.generate(10, 2, &mut StdRng::seed_from_u64(1234));
    let second = generator.generate(10, 2, &mut StdRng::seed_from_u64(1234));
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn test_different_seed_keeps_target() {
    let generator = ExpressionGenerator::default();
    for seed in 0..20 {
        let result = generator.generate(10, 2, &mut StdRng::seed_from_u64(seed));
        assert!(result.is_ok());
        if let Ok(expr) = result {
            assert_eq!(expr.evaluate(), Ok(10));
        }
    }
}

#[test]
fn test_one_draw_pair_per_internal_node() {
    let generator = ExpressionGenerator::default();
    let mut source = CountingSource {
        rng: StdRng::seed_from_u64(3),
        operators: 0,
        operands: 0,
    };
    let result = generator.generate_with(42, 5, &mut source);
    assert!(result.is_ok());
    assert_eq!(source.operators, 31);
    assert_eq!(source.operands, 31);
}

#[test]
fn test_outer_operands_stay_in_range() {
    let generator = ExpressionGenerator::new(3, 9);
    assert!(generator.is_ok());
    if let Ok(generator) = generator {
        let mut rng = StdRng::seed_from_u64(99);
        let result = generator.generate(-500, 6, &mut rng);
        assert!(result.is_ok());
        if let Ok(expr) = result {
            let mut outer = Vec::new();
            outer_operands(&expr, &mut outer);
            assert_eq!(outer.len(), 63);
            assert!(outer.iter().all(|v| (3..=9).contains(v)));
        }
    }
}

#[test]
fn test_fixed_operand_range() {
    let generator = ExpressionGenerator::new(4, 4);
    assert!(generator.is_ok());
    if let Ok(generator) = generator {
        assert_eq!(generator.min_operand(), 4);
        assert_eq!(generator.max_operand(), 4);
        let mut rng = StdRng::seed_from_u64(5);
        let result = generator.generate(17, 4, &mut rng);
        assert!(result.is_ok());
        if let Ok(expr) = result {
            let mut outer = Vec::new();
            outer_operands(&expr, &mut outer);
            assert!(outer.iter().all(|v| *v == 4));
            assert_eq!(expr.evaluate(), Ok(17));
        }
    }
}

#[test]
fn test_generate_many() {
    let generator = ExpressionGenerator::default();
    let mut rng = StdRng::seed_from_u64(21);
    let result = generator.generate_many(100, 3, 5, &mut rng);
    assert!(result.is_ok());
    if let Ok(trees) = result {
        assert_eq!(trees.len(), 5);
        for tree in &trees {
            assert_eq!(tree.evaluate(), Ok(100));
            assert_eq!(tree.leaf_count(), 8);
        }
    }
}

#[test]
fn test_generate_many_parallel_is_reproducible() {
    let generator = ExpressionGenerator::default();
    let first = generator.generate_many_parallel(42, 4, 16, 77);
    let second = generator.generate_many_parallel(42, 4, 16, 77);
    assert!(first.is_ok());
    assert_eq!(first, second);
    if let Ok(trees) = first {
        assert_eq!(trees.len(), 16);
        assert!(trees.iter().all(|t| t.evaluate() == Ok(42)));
    }
}

#[test]
fn test_generate_many_rejects_zero_count() {
    let generator = ExpressionGenerator::default();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generator.generate_many(1, 1, 0, &mut rng),
        Err(GeneratorError::InvalidCount)
    );
    assert_eq!(
        generator.generate_many_parallel(1, 1, 0, 0),
        Err(GeneratorError::InvalidCount)
    );
}

#[test]
fn test_negative_depth_rejected() {
    let generator = ExpressionGenerator::default();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generator.generate(10, -1, &mut rng),
        Err(GeneratorError::InvalidDepth(-1))
    );
}

#[test]
fn test_inverted_range_rejected() {
    assert_eq!(
        ExpressionGenerator::new(20, 1),
        Err(GeneratorError::InvalidOperandRange { min: 20, max: 1 })
    );
}

#[test]
fn test_derived_operand_overflow() {
    let generator = ExpressionGenerator::default();
    let mut source = ScriptedSource::new(&[(Operator::Subtract, 5)]);
    assert_eq!(
        generator.generate_with(i64::MAX, 1, &mut source),
        Err(GeneratorError::Overflow {
            target: i64::MAX,
            operand: 5
        })
    );
}

#[test]
fn test_validation_helpers() {
    assert_eq!(validate_depth(0), Ok(0));
    assert_eq!(validate_depth(20), Ok(20));
    assert_eq!(
        validate_depth(21),
        Err(GeneratorError::DepthTooLarge { depth: 21 })
    );
    assert_eq!(validate_depth(-3), Err(GeneratorError::InvalidDepth(-3)));
    assert!(validate_operand_range(-5, -5).is_ok());
    assert!(validate_operand_range(1, 0).is_err());
    assert!(validate_count(1).is_ok());
    assert!(validate_count(0).is_err());
}
