//! Simulation configuration loaded from YAML and overridden by flags.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sl_core::Lanes4;
use sl_spring::{SolverOptions, SpringParams, SpringState};

use crate::error::{CliError, CliResult};

fn default_dt() -> f64 {
    1.0 / 60.0
}

fn default_steps() -> usize {
    60
}

/// A spring, its solver options, an initial state and a frame schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub params: SpringParams,
    #[serde(default)]
    pub options: SolverOptions,
    #[serde(default)]
    pub initial: SpringState,
    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            params: SpringParams::default(),
            options: SolverOptions::default(),
            initial: SpringState::at_rest(Lanes4::ONE),
            dt: default_dt(),
            steps: default_steps(),
        }
    }
}

/// Command-line values that replace fields of a loaded config.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub stiffness: Option<f64>,
    pub damping: Option<f64>,
    pub response: Option<f64>,
    pub damping_ratio: Option<f64>,
    pub dt: Option<f64>,
    pub steps: Option<usize>,
    pub x0: Option<Vec<f64>>,
    pub v0: Option<Vec<f64>>,
    pub legacy: bool,
}

impl SimulationConfig {
    pub fn from_yaml_str(text: &str, path: &Path) -> CliResult<Self> {
        serde_yaml::from_str(text).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text, path)
    }

    /// Apply flag overrides. A response/damping-ratio pair replaces the
    /// stiffness/damping pair entirely.
    pub fn apply(mut self, o: &Overrides) -> CliResult<Self> {
        match (o.response, o.damping_ratio) {
            (Some(response), Some(zeta)) => {
                self.params = SpringParams::from_response(response, zeta)?;
            }
            (None, None) => {
                if let Some(k) = o.stiffness {
                    self.params.stiffness = k;
                }
                if let Some(c) = o.damping {
                    self.params.damping = c;
                }
            }
            _ => {
                return Err(CliError::InvalidInput(
                    "--response and --damping-ratio must be given together".to_string(),
                ));
            }
        }
        if let Some(dt) = o.dt {
            self.dt = dt;
        }
        if let Some(steps) = o.steps {
            self.steps = steps;
        }
        if let Some(x0) = &o.x0 {
            self.initial.position = Lanes4::from_slice(x0)?;
        }
        if let Some(v0) = &o.v0 {
            self.initial.velocity = Lanes4::from_slice(v0)?;
        }
        if o.legacy {
            self.options = SolverOptions::under_damped_only()
                .with_critical_band(self.options.critical_band);
        }
        Ok(self)
    }

    /// Reject configurations the solver would turn into NaN/Inf.
    pub fn validate(&self) -> CliResult<()> {
        self.params.validate()?;
        self.options.validate()?;
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(CliError::InvalidInput(format!(
                "dt must be finite and non-negative, got {}",
                self.dt
            )));
        }
        if !self.initial.is_finite() {
            return Err(CliError::InvalidInput(
                "initial state must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
