use super::TerrainCondition;
use crate::core_types::units::{Meters, MetersPerSecondSquared, Radians};
use serde::{Deserialize, Serialize};

/// Straight channel with the same depth, slope and gravity everywhere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformChannel {
    /// Flow depth
    pub depth: Meters,
    /// Ground slope
    pub slope: Radians,
    /// Gravitational acceleration
    pub gravity: MetersPerSecondSquared,
}

impl UniformChannel {
    /// Channel under standard gravity
    pub fn new(depth: Meters, slope: Radians) -> Self {
        UniformChannel {
            depth,
            slope,
            gravity: MetersPerSecondSquared::STANDARD_GRAVITY,
        }
    }

    /// Same channel under another gravity (other planets, sensitivity runs)
    pub fn with_gravity(self, gravity: MetersPerSecondSquared) -> Self {
        UniformChannel { gravity, ..self }
    }
}

impl TerrainCondition for UniformChannel {
    fn gravity(&self, _position: Meters) -> MetersPerSecondSquared {
        self.gravity
    }

    fn channel_depth(&self, _position: Meters) -> Meters {
        self.depth
    }

    fn channel_slope(&self, _position: Meters) -> Radians {
        self.slope
    }
}
