//! Simulation-specific error types.
//!
//! Invalid numeric state is rejected when it enters the simulation — at
//! component construction and at config load — rather than at every use
//! site.  The per-tick stages themselves have no recoverable-error channel:
//! their guards are benign no-ops, and a non-positive frame delta is a fatal
//! precondition violation handled by an assert in the integrator.

use std::fmt;

/// Top-level error enum for the sandbox simulation.
#[derive(Debug)]
pub enum SimError {
    /// A rigid body was constructed with a negative inverse mass.
    /// Zero is valid (infinite mass, immovable); negative is meaningless.
    InvalidInverseMass {
        /// The value that was rejected.
        inverse_mass: f32,
    },

    /// A physics constant is outside its safe operating range.
    /// Returned by the validation helpers used at config-load time.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidInverseMass { inverse_mass } => write!(
                f,
                "inverse mass must be >= 0 (0 = immovable); got {}",
                inverse_mass
            ),
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `inverse_mass` is negative.  Zero is accepted and
/// denotes an immovable body.
pub fn validate_inverse_mass(inverse_mass: f32) -> SimResult<()> {
    if inverse_mass < 0.0 || !inverse_mass.is_finite() {
        Err(SimError::InvalidInverseMass { inverse_mass })
    } else {
        Ok(())
    }
}

/// Returns an error if `restitution` is outside `[0.0, 1.0)`.
///
/// At 1.0 or above, boundary bounces retain (or gain) energy and the
/// simulation never settles.
pub fn validate_restitution(value: f32) -> SimResult<()> {
    if !(0.0..1.0).contains(&value) {
        Err(SimError::UnsafeConstant {
            name: "restitution",
            value,
            safe_range: "[0.0, 1.0)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if either drag coefficient is negative.
/// Negative coefficients would turn drag into propulsion.
pub fn validate_drag_coefficients(k1: f32, k2: f32) -> SimResult<()> {
    if k1 < 0.0 {
        return Err(SimError::UnsafeConstant {
            name: "drag_k1",
            value: k1,
            safe_range: "[0.0, ∞)",
        });
    }
    if k2 < 0.0 {
        return Err(SimError::UnsafeConstant {
            name: "drag_k2",
            value: k2,
            safe_range: "[0.0, ∞)",
        });
    }
    Ok(())
}

/// Returns an error if the damping coefficient is negative.
pub fn validate_damping_coefficient(value: f32) -> SimResult<()> {
    if value < 0.0 {
        Err(SimError::UnsafeConstant {
            name: "damping_coefficient",
            value,
            safe_range: "[0.0, ∞)",
        })
    } else {
        Ok(())
    }
}
