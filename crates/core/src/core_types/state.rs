//! Per-step flow snapshot handed to every submodel

use super::units::{Fraction, Kelvin, Meters, MetersPerSecond};
use serde::{Deserialize, Serialize};

/// Read-only view of the simulation variables at the current downflow position.
///
/// Created by the integrator once per step and discarded afterwards. Submodels only
/// ever receive `&FlowState`, so they cannot mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    position: Meters,
    crystal_fraction: Fraction,
    velocity: MetersPerSecond,
    core_temperature: Kelvin,
}

impl FlowState {
    /// Snapshot with every variable given explicitly
    pub fn new(
        position: Meters,
        crystal_fraction: Fraction,
        velocity: MetersPerSecond,
        core_temperature: Kelvin,
    ) -> Self {
        FlowState {
            position,
            crystal_fraction,
            velocity,
            core_temperature,
        }
    }

    /// Vent conditions: position zero, given core temperature and crystal content,
    /// with the flow at rest until the integrator supplies a velocity.
    pub fn at_vent(core_temperature: Kelvin, crystal_fraction: Fraction) -> Self {
        FlowState::new(
            Meters::new(0.0),
            crystal_fraction,
            MetersPerSecond::new(0.0),
            core_temperature,
        )
    }

    /// Downflow distance from the vent
    #[inline]
    pub fn current_position(&self) -> Meters {
        self.position
    }

    /// Volume fraction of crystals in the melt
    #[inline]
    pub fn crystal_fraction(&self) -> Fraction {
        self.crystal_fraction
    }

    /// Mean flow velocity
    #[inline]
    pub fn velocity(&self) -> MetersPerSecond {
        self.velocity
    }

    /// Temperature of the flow core
    #[inline]
    pub fn core_temperature(&self) -> Kelvin {
        self.core_temperature
    }

    /// Same state at another position. Used by drivers that sample a prescribed
    /// profile rather than integrating one.
    pub fn with_position(self, position: Meters) -> Self {
        FlowState { position, ..self }
    }

    /// Same state with another crystal fraction
    pub fn with_crystal_fraction(self, crystal_fraction: Fraction) -> Self {
        FlowState {
            crystal_fraction,
            ..self
        }
    }

    /// Same state with another velocity
    pub fn with_velocity(self, velocity: MetersPerSecond) -> Self {
        FlowState { velocity, ..self }
    }

    /// Same state with another core temperature
    pub fn with_core_temperature(self, core_temperature: Kelvin) -> Self {
        FlowState {
            core_temperature,
            ..self
        }
    }
}
