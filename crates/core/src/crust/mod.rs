//! Surface crust: temperature and areal coverage
//!
//! The radiating surface of a channelized flow is a mosaic of cool crust and hot
//! molten material exposed in cracks. These two models supply its proportions
//! and the crust temperature.

mod cover;

pub use cover::{ConstantCover, VelocityDependentCover};

use crate::core_types::units::{Fraction, Kelvin};
use crate::core_types::FlowState;
use serde::{Deserialize, Serialize};

/// Surface crust temperature estimate
pub trait CrustTemperatureModel: Send + Sync {
    /// Crust temperature for the current flow state
    fn compute_crust_temperature(&self, state: &FlowState) -> Kelvin;
}

/// Fraction of the channel surface covered by solid crust
pub trait EffectiveCoverCrustModel: Send + Sync {
    /// Cover fraction for the current flow state, expected in [0, 1]
    fn compute_effective_cover_fraction(&self, state: &FlowState) -> Fraction;
}

/// Crust at one fixed temperature along the whole channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantCrustTemperature {
    /// Crust temperature
    pub temperature: Kelvin,
}

impl ConstantCrustTemperature {
    /// Crust held at `temperature`
    pub fn new(temperature: Kelvin) -> Self {
        ConstantCrustTemperature { temperature }
    }
}

impl CrustTemperatureModel for ConstantCrustTemperature {
    fn compute_crust_temperature(&self, _state: &FlowState) -> Kelvin {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_crust_temperature() {
        let model = ConstantCrustTemperature::new(Kelvin::new(773.0));
        let state = FlowState::at_vent(Kelvin::new(1387.0), Fraction::new(0.1));
        assert_eq!(model.compute_crust_temperature(&state), Kelvin::new(773.0));
    }
}
