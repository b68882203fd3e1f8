//! Simulation errors
//!
//! Geometric degeneracies (parallel edges, no intercept) are not errors; they
//! surface as `None`. Only bad driver input ends up here.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    #[error("invalid timestep: {0} (must be finite and non-negative)")]
    InvalidTimestep(f32),
}

/// Validate a frame timestep. Returns `Ok(false)` for a zero step, which
/// callers treat as a no-op.
pub fn check_dt(dt: f32) -> Result<bool, SimError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(SimError::InvalidTimestep(dt));
    }
    Ok(dt > 0.0)
}
