use serde::{Deserialize, Serialize};
use sl_core::Lanes4;

/// Position and velocity of a spring's four lanes at one instant.
///
/// Displacement is measured from equilibrium (the zero vector).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpringState {
    pub position: Lanes4,
    #[serde(default)]
    pub velocity: Lanes4,
}

impl SpringState {
    pub fn new(position: Lanes4, velocity: Lanes4) -> Self {
        Self { position, velocity }
    }

    /// Displaced by `position` with zero velocity.
    pub fn at_rest(position: Lanes4) -> Self {
        Self {
            position,
            velocity: Lanes4::ZERO,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
