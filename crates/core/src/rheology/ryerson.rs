//! Crystal-fraction power-law yield strength
//!
//! # Formula
//! ```text
//! τ₀ = 6500 φ^2.85
//! ```
//!
//! Where **φ** is the crystal volume fraction. τ₀(0) = 0 and τ₀ is strictly
//! increasing on (0, 1].
//!
//! # References
//! - Ryerson, F.J., Weed, H.C. & Piwinskii, A.J. (1988). "Rheology of subliquidus
//!   magmas: 1. Picritic compositions." JGR, 93(B4), 3421-3436
//! - Pinkerton, H. & Stevenson, R.J. (1992). "Methods of determining the
//!   rheological properties of magmas at sub-liquidus temperatures." JVGR, 53

use super::{basal_shear_stress, YieldStrengthModel, BASAL_SHEAR_STRESS, YIELD_STRENGTH};
use crate::config::{ParameterFile, YieldStrengthParameters};
use crate::core_types::units::{Fraction, Pascals};
use crate::core_types::FlowState;
use crate::diagnostics::DiagnosticSink;
use crate::error::FlowResult;
use crate::material::MaterialLava;
use crate::terrain::TerrainCondition;
use crate::validation;
use std::sync::Arc;
use tracing::info;

/// Prefactor of the power law (Pa)
const YIELD_COEFFICIENT: f64 = 6500.0;
/// Exponent on the crystal fraction
const YIELD_EXPONENT: f64 = 2.85;

/// τ₀ for a crystal fraction, without validation
#[inline]
pub fn ryerson_yield_strength(crystal_fraction: Fraction) -> Pascals {
    Pascals::new(YIELD_COEFFICIENT * crystal_fraction.powf(YIELD_EXPONENT))
}

/// Yield strength depending only on crystal content
pub struct RyersonYieldStrength {
    parameters: YieldStrengthParameters,
    sink: Arc<dyn DiagnosticSink>,
}

impl RyersonYieldStrength {
    /// Build from already-loaded parameters
    pub fn new(parameters: YieldStrengthParameters, sink: Arc<dyn DiagnosticSink>) -> FlowResult<Self> {
        parameters.validate()?;
        Ok(RyersonYieldStrength { parameters, sink })
    }

    /// Build from the `eruption_condition` section of a parameter file
    pub fn from_parameters(file: &ParameterFile, sink: Arc<dyn DiagnosticSink>) -> FlowResult<Self> {
        let parameters = file.yield_strength_parameters()?;
        info!(
            eruption_temperature = *parameters.eruption_temperature,
            "ryerson yield strength model configured"
        );
        Self::new(parameters, sink)
    }

    /// Loaded vent conditions. The power law itself does not use them.
    pub fn parameters(&self) -> &YieldStrengthParameters {
        &self.parameters
    }
}

impl YieldStrengthModel for RyersonYieldStrength {
    fn compute_yield_strength(&self, state: &FlowState) -> FlowResult<Pascals> {
        let phi = validation::unit_interval("crystal_fraction", *state.crystal_fraction())?;
        let tau_0 = ryerson_yield_strength(Fraction::new(phi));
        self.sink
            .add_variable(YIELD_STRENGTH, state.current_position(), *tau_0);
        Ok(tau_0)
    }

    fn compute_basal_shear_stress(
        &self,
        state: &FlowState,
        terrain: &dyn TerrainCondition,
        material: &dyn MaterialLava,
    ) -> FlowResult<Pascals> {
        let tau_b = basal_shear_stress(state, terrain, material)?;
        self.sink
            .add_variable(BASAL_SHEAR_STRESS, state.current_position(), *tau_b);
        Ok(tau_b)
    }

    fn name(&self) -> &'static str {
        "yield_strength_ryerson"
    }
}
