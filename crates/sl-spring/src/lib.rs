//! Closed-form damped spring solver for springlane.
//!
//! Advances up to four independent spring channels by an arbitrary time step
//! using the analytic solution of `x'' + 2ζω0 x' + ω0² x = 0`, so repeated
//! stepping carries no integration error.
//!
//! # Architecture
//!
//! - [`SpringParams`] holds the physical stiffness/damping pair
//! - [`SpringConstants`] caches `w0`, the damping ratio and `wD`
//! - [`DampingRegime`] selects the under/critically/over-damped closed form
//! - [`SpringSolver`] owns the cached constants and performs the step
//!
//! # Example
//!
//! ```
//! use sl_core::Lanes4;
//! use sl_spring::{SpringParams, SpringSolver, SpringState};
//!
//! let solver = SpringSolver::new(SpringParams::new(100.0, 10.0).unwrap());
//! let mut state = SpringState::at_rest(Lanes4::ONE);
//! for _ in 0..600 {
//!     state = solver.step(1.0 / 60.0, state);
//! }
//! assert!(state.position.max_abs() < 1e-3);
//! ```

pub mod error;
pub mod params;
pub mod regime;
pub mod solver;
pub mod state;
pub mod trajectory;

pub use error::{SpringError, SpringResult};
pub use params::{SpringConstants, SpringParams};
pub use regime::{DampingRegime, RegimePolicy, SolverOptions};
pub use solver::{SpringSolver, solve, step};
pub use state::SpringState;
pub use trajectory::Trajectory;
