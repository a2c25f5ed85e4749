//! Progressive overload: bounded adjustments to an exercise's working weight.
//!
//! Three operations on an already-resolved exercise:
//! - increment: add the delta, no upper bound
//! - decrement: subtract the delta, clamping at zero
//! - set: overwrite unconditionally (deloads and arbitrary jumps allowed)

use crate::{Error, Exercise, Result};

/// Increase the working weight by `delta`
///
/// Returns the new weight.
pub fn increment(exercise: &mut Exercise, delta: f64) -> f64 {
    exercise.current_weight += delta;
    tracing::debug!("Incremented weight to {}", exercise.current_weight);
    exercise.current_weight
}

/// Decrease the working weight by `delta`, clamping at zero
///
/// Underflow clamps rather than errors: dropping below the empty bar is
/// not a caller mistake worth failing over.
pub fn decrement(exercise: &mut Exercise, delta: f64) -> f64 {
    exercise.current_weight = (exercise.current_weight - delta).max(0.0);
    tracing::debug!("Decremented weight to {}", exercise.current_weight);
    exercise.current_weight
}

/// Overwrite the working weight
///
/// Rejects non-finite and negative values; anything else is accepted with
/// no bounds relative to the previous weight.
pub fn set_weight(exercise: &mut Exercise, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "weight must be a finite non-negative number, got {}",
            value
        )));
    }
    exercise.current_weight = value;
    tracing::debug!("Set weight to {}", value);
    Ok(value)
}
