//! Yield strength and basal shear stress submodels
//!
//! Lava behaves as a Bingham fluid: it only flows where the basal shear stress
//! exceeds its yield strength. Every yield-strength law implements
//! [`YieldStrengthModel`]; the basal shear stress is the same gravity-driven
//! balance for all of them and lives in [`basal_shear_stress`].

mod dragoni;
mod ryerson;

pub use dragoni::DragoniYieldStrength;
pub use ryerson::{ryerson_yield_strength, RyersonYieldStrength};

use crate::core_types::units::Pascals;
use crate::core_types::FlowState;
use crate::error::FlowResult;
use crate::material::MaterialLava;
use crate::terrain::TerrainCondition;
use crate::validation;

/// Diagnostic name of the yield strength τ₀
pub(crate) const YIELD_STRENGTH: &str = "tho_0";
/// Diagnostic name of the basal shear stress τ_b
pub(crate) const BASAL_SHEAR_STRESS: &str = "tho_b";

/// A yield strength law plus the basal shear stress it is compared against
pub trait YieldStrengthModel: Send + Sync {
    /// Yield strength τ₀ of the lava in its current state
    fn compute_yield_strength(&self, state: &FlowState) -> FlowResult<Pascals>;

    /// Driving shear stress τ_b at the channel base
    fn compute_basal_shear_stress(
        &self,
        state: &FlowState,
        terrain: &dyn TerrainCondition,
        material: &dyn MaterialLava,
    ) -> FlowResult<Pascals>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

/// Gravity-driven shear stress at the base of the flow.
///
/// # Formula
/// ```text
/// τ_b = h ρ g sin θ
/// ```
///
/// Depth h, slope θ and gravity g are all looked up at the state's current
/// position; ρ is the bulk density of the lava.
pub fn basal_shear_stress(
    state: &FlowState,
    terrain: &dyn TerrainCondition,
    material: &dyn MaterialLava,
) -> FlowResult<Pascals> {
    let position = state.current_position();

    let gravity = validation::positive("gravity", *terrain.gravity(position))?;
    let density = validation::positive("bulk_density", *material.bulk_density(state))?;
    let depth = validation::non_negative("channel_depth", *terrain.channel_depth(position))?;
    let slope = validation::finite("channel_slope", *terrain.channel_slope(position))?;

    let tau_b = depth * density * gravity * slope.sin();
    validation::finite("basal_shear_stress", tau_b).map(Pascals::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Fraction, Kelvin, Meters, MetersPerSecondSquared, Radians};
    use crate::material::BasicLava;
    use crate::terrain::UniformChannel;
    use approx::assert_relative_eq;

    #[test]
    fn test_basal_shear_stress_formula() {
        let terrain = UniformChannel::new(Meters::new(4.0), Radians::from_degrees(30.0));
        let lava = BasicLava::basalt();
        let state = FlowState::at_vent(Kelvin::new(1387.0), Fraction::new(0.1));
        let tau = basal_shear_stress(&state, &terrain, &lava).unwrap();
        assert_relative_eq!(*tau, 4.0 * 2520.0 * 9.81 * 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_flat_channel_has_no_driving_stress() {
        let terrain = UniformChannel::new(Meters::new(4.0), Radians::new(0.0));
        let state = FlowState::at_vent(Kelvin::new(1387.0), Fraction::new(0.1));
        let tau = basal_shear_stress(&state, &terrain, &BasicLava::basalt()).unwrap();
        assert_eq!(*tau, 0.0);
    }

    #[test]
    fn test_rejects_negative_depth_and_zero_gravity() {
        let state = FlowState::at_vent(Kelvin::new(1387.0), Fraction::new(0.1));
        let lava = BasicLava::basalt();

        let negative = UniformChannel::new(Meters::new(-1.0), Radians::new(0.1));
        assert!(basal_shear_stress(&state, &negative, &lava).is_err());

        let weightless = UniformChannel::new(Meters::new(1.0), Radians::new(0.1))
            .with_gravity(MetersPerSecondSquared::new(0.0));
        assert!(basal_shear_stress(&state, &weightless, &lava).is_err());
    }
}
