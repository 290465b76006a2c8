//! Stateless distribution transforms over a canonical draw in `[0, 1)`.
//!
//! Each function maps a uniform draw `r` to a domain quantity. None of
//! them hold state or consume randomness themselves; the caller supplies
//! the draw, which keeps every transformation reproducible and trivially
//! testable against its closed form.

/// Errors for draws or parameters outside a transform's domain.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// The draw was outside the half-open unit interval.
    #[error("draw {draw} is outside [0, 1)")]
    DrawOutOfRange {
        /// The offending draw.
        draw: f64,
    },

    /// The exponential mean must be strictly positive.
    #[error("exponential mean {mean} is not positive")]
    NonPositiveMean {
        /// The offending mean.
        mean: f64,
    },
}

/// Map a draw onto the interval `[lo, hi)`: `lo + r * (hi - lo)`.
pub fn uniform(r: f64, lo: f64, hi: f64) -> f64 {
    (hi - lo).mul_add(r, lo)
}

/// Sample an exponential distribution by inversion: `-mean * ln(1 - r)`.
///
/// The mean must be strictly positive and the draw must lie in `[0, 1)`;
/// a draw of exactly 1 would take the logarithm of zero.
///
/// # Errors
///
/// Returns [`DomainError::DrawOutOfRange`] if `r` is not in `[0, 1)`, or
/// [`DomainError::NonPositiveMean`] if `mean <= 0`.
pub fn exponential(r: f64, mean: f64) -> Result<f64, DomainError> {
    if !(0.0..1.0).contains(&r) {
        return Err(DomainError::DrawOutOfRange { draw: r });
    }
    if mean <= 0.0 {
        return Err(DomainError::NonPositiveMean { mean });
    }
    Ok(-mean * (1.0 - r).ln())
}

/// Restrict `x` to the closed interval `[lo, hi]`.
///
/// Callers must ensure `lo <= hi` and that no argument is NaN.
pub const fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}
