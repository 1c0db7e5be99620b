use super::MaterialLava;
use crate::core_types::units::{Fraction, KgPerCubicMeter, Kelvin};
use crate::core_types::FlowState;
use serde::{Deserialize, Serialize};

/// Lava with fixed dense-rock density and vesicularity.
///
/// Exposed molten material is taken to be at the core temperature of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicLava {
    /// Dense-rock-equivalent density
    pub dense_rock_density: KgPerCubicMeter,
    /// Volume fraction of bubbles
    pub vesicularity: Fraction,
}

impl BasicLava {
    /// Lava with the given DRE density and vesicle fraction
    pub fn new(dense_rock_density: KgPerCubicMeter, vesicularity: Fraction) -> Self {
        BasicLava {
            dense_rock_density,
            vesicularity,
        }
    }

    /// Typical basalt: 2800 kg/m³ DRE, 10 % vesicles
    pub fn basalt() -> Self {
        BasicLava::new(KgPerCubicMeter::new(2800.0), Fraction::new(0.1))
    }
}

impl MaterialLava for BasicLava {
    fn bulk_density(&self, _state: &FlowState) -> KgPerCubicMeter {
        self.dense_rock_density * *self.vesicularity.complement()
    }

    fn molten_material_temperature(&self, state: &FlowState) -> Kelvin {
        state.core_temperature()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bulk_density_removes_vesicles() {
        let lava = BasicLava::basalt();
        let state = FlowState::at_vent(Kelvin::new(1387.0), Fraction::new(0.1));
        assert_relative_eq!(*lava.bulk_density(&state), 2520.0, epsilon = 1e-9);
    }

    #[test]
    fn test_molten_temperature_follows_core() {
        let lava = BasicLava::basalt();
        let state = FlowState::at_vent(Kelvin::new(1350.0), Fraction::new(0.2));
        assert_eq!(lava.molten_material_temperature(&state), Kelvin::new(1350.0));
    }
}
