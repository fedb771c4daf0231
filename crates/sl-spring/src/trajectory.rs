use sl_core::Real;

use crate::solver::SpringSolver;
use crate::state::SpringState;

/// Iterator over `(t, state)` frames of a spring stepped at a fixed `dt`.
///
/// Yields the initial state at `t = 0` followed by `steps` stepped frames; each
/// frame's output is the next frame's input.
#[derive(Clone, Debug)]
pub struct Trajectory {
    solver: SpringSolver,
    state: SpringState,
    dt: Real,
    frame: usize,
    steps: usize,
}

impl Trajectory {
    pub fn new(solver: SpringSolver, initial: SpringState, dt: Real, steps: usize) -> Self {
        Self {
            solver,
            state: initial,
            dt,
            frame: 0,
            steps,
        }
    }
}

impl Iterator for Trajectory {
    type Item = (Real, SpringState);

    fn next(&mut self) -> Option<Self::Item> {
        if self.frame > self.steps {
            return None;
        }
        if self.frame > 0 {
            self.state = self.solver.step(self.dt, self.state);
        }
        let t = self.frame as Real * self.dt;
        self.frame += 1;
        Some((t, self.state))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.frame);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Trajectory {}
