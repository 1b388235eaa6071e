pub const DEFAULT_MIN_OPERAND: i64 = 1;
pub const DEFAULT_MAX_OPERAND: i64 = 20;

/// A depth-20 tree already holds 2^20 leaves
pub const MAX_DEPTH: u32 = 20;
