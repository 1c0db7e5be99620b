//! Per-step evaluation of the selected submodels
//!
//! [`StepEvaluator`] is what an integrator holds: one heat flux formulation, one
//! yield-strength formulation and the terrain and lava they query, all injected at
//! construction. It evaluates them for a flow state and hands back the scalars; it
//! never advances the flow.

use crate::core_types::units::{Meters, Pascals, WattsPerMeter};
use crate::core_types::FlowState;
use crate::error::FlowResult;
use crate::flux::HeatFluxModel;
use crate::material::MaterialLava;
use crate::rheology::YieldStrengthModel;
use crate::terrain::TerrainCondition;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Submodel outputs at one position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Where the step was evaluated
    pub position: Meters,
    /// Surface heat loss per metre of channel
    pub flux: WattsPerMeter,
    /// Yield strength τ₀
    pub yield_strength: Pascals,
    /// Basal shear stress τ_b
    pub basal_shear_stress: Pascals,
}

impl StepResult {
    /// Lava moves only while the driving stress beats the yield strength
    pub fn is_mobile(&self) -> bool {
        self.basal_shear_stress > self.yield_strength
    }
}

/// Injected set of submodels evaluated together at each step
pub struct StepEvaluator {
    flux: Box<dyn HeatFluxModel>,
    yield_strength: Box<dyn YieldStrengthModel>,
    terrain: Arc<dyn TerrainCondition>,
    material: Arc<dyn MaterialLava>,
}

impl StepEvaluator {
    /// Wire the evaluator
    pub fn new(
        flux: Box<dyn HeatFluxModel>,
        yield_strength: Box<dyn YieldStrengthModel>,
        terrain: Arc<dyn TerrainCondition>,
        material: Arc<dyn MaterialLava>,
    ) -> Self {
        debug!(
            flux = flux.name(),
            yield_strength = yield_strength.name(),
            "step evaluator assembled"
        );
        StepEvaluator {
            flux,
            yield_strength,
            terrain,
            material,
        }
    }

    /// Terrain the evaluator queries
    pub fn terrain(&self) -> &dyn TerrainCondition {
        self.terrain.as_ref()
    }

    /// Evaluate every submodel at the state's position. The channel depth passed
    /// to the flux model comes from the terrain.
    pub fn evaluate(&self, state: &FlowState, channel_width: Meters) -> FlowResult<StepResult> {
        let position = state.current_position();
        let depth = self.terrain.channel_depth(position);

        let flux = self.flux.compute_flux(state, channel_width, depth)?;
        let yield_strength = self.yield_strength.compute_yield_strength(state)?;
        let basal_shear_stress = self.yield_strength.compute_basal_shear_stress(
            state,
            self.terrain.as_ref(),
            self.material.as_ref(),
        )?;

        Ok(StepResult {
            position,
            flux,
            yield_strength,
            basal_shear_stress,
        })
    }
}
