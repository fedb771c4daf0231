//! Analytic spring step.
//!
//! Each equation splits into two coefficients `A` and `B` that decay or
//! oscillate differently depending on the damping ratio. Position and velocity
//! are both computed in closed form so the pair can be fed into the next frame.

use sl_core::{Lanes4, Real};

use crate::params::{SpringConstants, SpringParams};
use crate::regime::{DampingRegime, SolverOptions};
use crate::state::SpringState;
use crate::trajectory::Trajectory;

/// A spring with its derived constants and selected regime cached.
///
/// Stateless across calls: position and velocity live with the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSolver {
    params: SpringParams,
    options: SolverOptions,
    constants: SpringConstants,
    regime: Option<DampingRegime>,
}

impl SpringSolver {
    /// Solver evaluating all three damping regimes.
    pub fn new(params: SpringParams) -> Self {
        Self::with_options(params, SolverOptions::default())
    }

    pub fn with_options(params: SpringParams, options: SolverOptions) -> Self {
        let constants = params.constants();
        if !constants.is_finite() {
            tracing::warn!(
                stiffness = params.stiffness,
                damping = params.damping,
                "spring constants are not finite, solutions will be NaN/Inf"
            );
        }
        let regime = options.select(constants.damping_ratio);
        tracing::trace!(
            w0 = constants.w0,
            damping_ratio = constants.damping_ratio,
            ?regime,
            "spring solver configured"
        );
        Self {
            params,
            options,
            constants,
            regime,
        }
    }

    pub fn params(&self) -> &SpringParams {
        &self.params
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    pub fn constants(&self) -> &SpringConstants {
        &self.constants
    }

    /// Regime evaluated by this solver, `None` when the policy skips it.
    pub fn regime(&self) -> Option<DampingRegime> {
        self.regime
    }

    /// Advance by `dt` from displacement `x0`.
    ///
    /// `velocity` holds the velocity at time zero on entry and is overwritten
    /// with the velocity at `dt`. Returns the displacement at `dt`.
    ///
    /// When the policy skips the regime the zero vector is returned and
    /// `velocity` is not touched.
    pub fn solve(&self, dt: Real, x0: Lanes4, velocity: &mut Lanes4) -> Lanes4 {
        let Some(regime) = self.regime else {
            return Lanes4::ZERO;
        };
        let next = match regime {
            DampingRegime::UnderDamped => under_damped(&self.constants, dt, x0, *velocity),
            DampingRegime::CriticallyDamped => {
                critically_damped(&self.constants, dt, x0, *velocity)
            }
            DampingRegime::OverDamped => over_damped(&self.constants, dt, x0, *velocity),
        };
        *velocity = next.velocity;
        next.position
    }

    /// Advance `state` by `dt`, returning the new `(position, velocity)` pair.
    pub fn step(&self, dt: Real, state: SpringState) -> SpringState {
        let mut velocity = state.velocity;
        let position = self.solve(dt, state.position, &mut velocity);
        SpringState { position, velocity }
    }

    /// Single-channel form of [`SpringSolver::step`].
    pub fn solve_scalar(&self, dt: Real, x0: Real, v0: Real) -> (Real, Real) {
        let next = self.step(dt, SpringState::new(Lanes4::splat(x0), Lanes4::splat(v0)));
        (next.position[0], next.velocity[0])
    }

    /// Frames produced by repeatedly stepping `initial` by `dt`.
    pub fn trajectory(&self, initial: SpringState, dt: Real, steps: usize) -> Trajectory {
        Trajectory::new(*self, initial, dt, steps)
    }
}

/// Advance one step with a default [`SpringSolver`].
///
/// `velocity` is updated in place; the new displacement is returned.
pub fn solve(params: SpringParams, dt: Real, x0: Lanes4, velocity: &mut Lanes4) -> Lanes4 {
    SpringSolver::new(params).solve(dt, x0, velocity)
}

/// Advance one step with a default [`SpringSolver`], returning the new state.
pub fn step(params: SpringParams, dt: Real, state: SpringState) -> SpringState {
    SpringSolver::new(params).step(dt, state)
}

fn under_damped(c: &SpringConstants, dt: Real, x0: Lanes4, v0: Lanes4) -> SpringState {
    let zeta_w0 = c.damping_ratio * c.w0;
    let envelope = (-zeta_w0 * dt).exp();
    let (sin_wd_dt, cos_wd_dt) = (c.wd * dt).sin_cos();

    let v0_x0_zeta_w0 = v0 + x0 * zeta_w0;

    let a = x0;
    let b = v0_x0_zeta_w0 / c.wd;

    let position = envelope * (a * cos_wd_dt + b * sin_wd_dt);

    // d/dt of the bracketed term, without the envelope.
    let d_x = v0_x0_zeta_w0 * cos_wd_dt - x0 * (c.wd * sin_wd_dt);
    let velocity = -(position * zeta_w0 - envelope * d_x);

    SpringState { position, velocity }
}

fn critically_damped(c: &SpringConstants, dt: Real, x0: Lanes4, v0: Lanes4) -> SpringState {
    let envelope = (-c.w0 * dt).exp();

    let a = x0;
    let b = v0 + x0 * c.w0;

    let position = envelope * (a + b * dt);
    let velocity = envelope * (v0 - b * (c.w0 * dt));

    SpringState { position, velocity }
}

fn over_damped(c: &SpringConstants, dt: Real, x0: Lanes4, v0: Lanes4) -> SpringState {
    let zeta_w0 = c.damping_ratio * c.w0;
    let spread = c.w0 * (c.damping_ratio * c.damping_ratio - 1.0).sqrt();

    // r_fast * r_slow = w0², which avoids cancellation in the slow root.
    let r_fast = -zeta_w0 - spread;
    let r_slow = c.w0 * c.w0 / r_fast;

    let c_fast = (x0 * r_slow - v0) / (r_slow - r_fast);
    let c_slow = x0 - c_fast;

    let e_fast = (r_fast * dt).exp();
    let e_slow = (r_slow * dt).exp();

    let position = c_fast * e_fast + c_slow * e_slow;
    let velocity = c_fast * (r_fast * e_fast) + c_slow * (r_slow * e_slow);

    SpringState { position, velocity }
}
