//! Damping regime selection and solver options.

use serde::{Deserialize, Serialize};
use sl_core::Real;

use crate::error::{SpringError, SpringResult};

/// Default absolute window around `ζ = 1` treated as critically damped.
pub const DEFAULT_CRITICAL_BAND: Real = 1e-9;

/// Which closed form applies to a spring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DampingRegime {
    /// `ζ < 1`: decaying oscillation.
    UnderDamped,
    /// `ζ ≈ 1`: fastest non-oscillating return.
    CriticallyDamped,
    /// `ζ > 1`: sum of two decaying exponentials.
    OverDamped,
}

impl DampingRegime {
    /// Classify a damping ratio.
    ///
    /// `|ζ − 1| <= critical_band` is critical. A NaN ratio is reported as
    /// over-damped so that it flows through a closed form and stays NaN.
    pub fn classify(damping_ratio: Real, critical_band: Real) -> Self {
        if (damping_ratio - 1.0).abs() <= critical_band {
            DampingRegime::CriticallyDamped
        } else if damping_ratio < 1.0 {
            DampingRegime::UnderDamped
        } else {
            DampingRegime::OverDamped
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DampingRegime::UnderDamped => "under_damped",
            DampingRegime::CriticallyDamped => "critically_damped",
            DampingRegime::OverDamped => "over_damped",
        }
    }
}

impl std::fmt::Display for DampingRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which regimes the solver evaluates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegimePolicy {
    /// Under-, critically- and over-damped closed forms.
    #[default]
    AllRegimes,
    /// Only `ζ < 1` is evaluated. For `ζ >= 1` the returned position is zero
    /// and the velocity is left untouched.
    UnderDampedOnly,
}

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    pub policy: RegimePolicy,
    /// Absolute window around `ζ = 1` treated as critical. Ignored by
    /// [`RegimePolicy::UnderDampedOnly`].
    pub critical_band: Real,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            policy: RegimePolicy::AllRegimes,
            critical_band: DEFAULT_CRITICAL_BAND,
        }
    }
}

impl SolverOptions {
    /// Options reproducing the under-damped-only behaviour.
    pub fn under_damped_only() -> Self {
        Self {
            policy: RegimePolicy::UnderDampedOnly,
            ..Self::default()
        }
    }

    pub fn with_critical_band(mut self, band: Real) -> Self {
        self.critical_band = band;
        self
    }

    pub fn validate(&self) -> SpringResult<()> {
        if !self.critical_band.is_finite() || self.critical_band < 0.0 {
            return Err(SpringError::InvalidOption {
                what: "critical_band must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Regime to evaluate for `damping_ratio`, or `None` when the policy
    /// skips computation.
    pub fn select(&self, damping_ratio: Real) -> Option<DampingRegime> {
        match self.policy {
            RegimePolicy::AllRegimes => {
                Some(DampingRegime::classify(damping_ratio, self.critical_band))
            }
            RegimePolicy::UnderDampedOnly => {
                (damping_ratio < 1.0).then_some(DampingRegime::UnderDamped)
            }
        }
    }
}
