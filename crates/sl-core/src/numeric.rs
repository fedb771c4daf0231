use crate::SlError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely absolute tolerance.
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Loose comparison used for configuration inputs (e.g. a zero response time).
///
/// Uses `sqrt(EPSILON)` as both the absolute and relative tolerance.
pub fn approximately_equal(a: Real, b: Real) -> bool {
    let eps = Real::EPSILON.sqrt();
    nearly_equal(a, b, Tolerances { abs: eps, rel: eps })
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SlError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SlError::NonFinite { what, value: v })
    }
}

pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, SlError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(SlError::InvalidArg { what });
    }
    Ok(v)
}
