use log::{debug, warn};

use crate::generator::constants::MAX_DEPTH;
use crate::generator::errors::GeneratorError;

/// # Errors
///
/// Returns an error if the depth is negative or larger than `MAX_DEPTH`.
pub fn validate_depth(depth: i64) -> Result<u32, GeneratorError> {
    debug!("Validating depth: {}", depth);

    if depth < 0 {
        warn!("Depth is negative: {}", depth);
        return Err(GeneratorError::InvalidDepth(depth));
    }

    match u32::try_from(depth) {
        Ok(d) if d <= MAX_DEPTH => Ok(d),
        _ => {
            warn!("Depth {} exceeds the maximum of {}", depth, MAX_DEPTH);
            Err(GeneratorError::DepthTooLarge { depth })
        }
    }
}

/// # Errors
///
/// Returns an error if `min` is greater than `max`.
pub fn validate_operand_range(min: i64, max: i64) -> Result<(), GeneratorError> {
    if min > max {
        warn!("Operand range is inverted: [{}, {}]", min, max);
        return Err(GeneratorError::InvalidOperandRange { min, max });
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if `count` is zero.
pub fn validate_count(count: usize) -> Result<(), GeneratorError> {
    if count == 0 {
        warn!("Requested zero expressions");
        return Err(GeneratorError::InvalidCount);
    }
    Ok(())
}
