//! Spring parameters and their derived constants.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use sl_core::{Real, approximately_equal, ensure_non_negative};

use crate::error::{SpringError, SpringResult};

/// Smallest response accepted by [`SpringParams::from_response`]; a zero
/// response is replaced by this value.
pub const MIN_RESPONSE: Real = 0.0001;

/// Physical parameters of a spring.
///
/// The fields are public so callers can build unchecked parameters, matching
/// the solver contract (degenerate inputs produce NaN/Inf, not errors). Use
/// [`SpringParams::new`] when validation is wanted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    /// Spring constant `k`.
    pub stiffness: Real,
    /// Damping coefficient `c`.
    pub damping: Real,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 10.0,
        }
    }
}

impl SpringParams {
    /// Create validated spring parameters.
    ///
    /// # Errors
    ///
    /// Returns error if either value is non-finite or negative, or if
    /// `stiffness` is zero.
    pub fn new(stiffness: Real, damping: Real) -> SpringResult<Self> {
        let params = Self { stiffness, damping };
        params.validate()?;
        Ok(params)
    }

    /// Build parameters from a response time and damping ratio.
    ///
    /// `response` is roughly how long (in seconds) the spring takes to settle;
    /// `damping_ratio` ranges from `0.0` (oscillate forever) through `1.0`
    /// (critically damped) and above (over-damped).
    ///
    /// - `stiffness = (2π / response)²`
    /// - `damping = 4π·ζ / response`
    ///
    /// A response approximately equal to zero is replaced by [`MIN_RESPONSE`].
    pub fn from_response(response: Real, damping_ratio: Real) -> SpringResult<Self> {
        let response = ensure_non_negative(response, "response")?;
        let damping_ratio = ensure_non_negative(damping_ratio, "damping_ratio")?;

        let response = if approximately_equal(response, 0.0) {
            MIN_RESPONSE
        } else {
            response
        };

        let stiffness = (2.0 * PI / response).powi(2);
        let damping = 4.0 * PI * damping_ratio / response;
        Self::new(stiffness, damping)
    }

    /// Check the physical constraints: both finite, `damping >= 0`, `stiffness > 0`.
    pub fn validate(&self) -> SpringResult<()> {
        ensure_non_negative(self.stiffness, "stiffness")?;
        ensure_non_negative(self.damping, "damping")?;
        if self.stiffness == 0.0 {
            return Err(SpringError::InvalidParam {
                what: "stiffness must be positive",
            });
        }
        Ok(())
    }

    /// Derived constants for these parameters.
    pub fn constants(&self) -> SpringConstants {
        SpringConstants::from_params(self)
    }
}

/// Constants derived from [`SpringParams`], computed once per spring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConstants {
    /// Undamped angular frequency, `sqrt(stiffness)`.
    pub w0: Real,
    /// `damping / (2·w0)`.
    pub damping_ratio: Real,
    /// Damped angular frequency, `w0·sqrt(1 − ζ²)`. NaN when `ζ > 1`.
    pub wd: Real,
}

impl SpringConstants {
    pub fn from_params(params: &SpringParams) -> Self {
        let w0 = params.stiffness.sqrt();
        let damping_ratio = params.damping / (2.0 * w0);
        let wd = w0 * (1.0 - damping_ratio * damping_ratio).sqrt();
        Self {
            w0,
            damping_ratio,
            wd,
        }
    }

    /// True when `w0` and the damping ratio are finite.
    ///
    /// `wd` is excluded since it is legitimately NaN for over-damped springs.
    pub fn is_finite(&self) -> bool {
        self.w0.is_finite() && self.damping_ratio.is_finite()
    }
}
