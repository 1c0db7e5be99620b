//! Undercooling-driven yield strength
//!
//! # Formula
//! ```text
//! τ₀ = b (exp(c (T_erupt − T_core)) − 1)
//! ```
//!
//! Where:
//! - **b** = 0.01 Pa
//! - **c** = 0.08 K⁻¹
//! - **T_erupt** = eruption temperature (the reference at which τ₀ = 0)
//!
//! Lava hotter than at eruption has no yield strength, so τ₀ is floored at zero.
//!
//! # References
//! - Dragoni, M. (1989). "A dynamical model of lava flows cooling by radiation."
//!   Bull. Volcanol., 51, 88-95

use super::{basal_shear_stress, YieldStrengthModel, BASAL_SHEAR_STRESS, YIELD_STRENGTH};
use crate::config::{ParameterFile, YieldStrengthParameters};
use crate::core_types::units::{Kelvin, Pascals};
use crate::core_types::FlowState;
use crate::diagnostics::DiagnosticSink;
use crate::error::FlowResult;
use crate::material::MaterialLava;
use crate::terrain::TerrainCondition;
use crate::validation;
use std::sync::Arc;
use tracing::info;

/// Yield strength from undercooling below the eruption temperature
pub struct DragoniYieldStrength {
    parameters: YieldStrengthParameters,
    /// Prefactor b (Pa)
    b: f64,
    /// Rate c (1/K)
    c: f64,
    sink: Arc<dyn DiagnosticSink>,
}

impl DragoniYieldStrength {
    /// Dragoni (1989) constant b
    pub const DEFAULT_B: f64 = 0.01;
    /// Dragoni (1989) constant c
    pub const DEFAULT_C: f64 = 0.08;

    /// Build from already-loaded parameters with the published constants
    pub fn new(parameters: YieldStrengthParameters, sink: Arc<dyn DiagnosticSink>) -> FlowResult<Self> {
        parameters.validate()?;
        Ok(DragoniYieldStrength {
            parameters,
            b: Self::DEFAULT_B,
            c: Self::DEFAULT_C,
            sink,
        })
    }

    /// Build from the `eruption_condition` section of a parameter file
    pub fn from_parameters(file: &ParameterFile, sink: Arc<dyn DiagnosticSink>) -> FlowResult<Self> {
        let parameters = file.yield_strength_parameters()?;
        info!(
            eruption_temperature = *parameters.eruption_temperature,
            "dragoni yield strength model configured"
        );
        Self::new(parameters, sink)
    }

    /// Override the fit constants
    pub fn with_constants(self, b: f64, c: f64) -> Self {
        DragoniYieldStrength { b, c, ..self }
    }

    /// Reference temperature of the law
    pub fn eruption_temperature(&self) -> Kelvin {
        self.parameters.eruption_temperature
    }
}

impl YieldStrengthModel for DragoniYieldStrength {
    fn compute_yield_strength(&self, state: &FlowState) -> FlowResult<Pascals> {
        let core = validation::positive("core_temperature", *state.core_temperature())?;
        let undercooling = *self.parameters.eruption_temperature - core;
        let tau_0 = (self.b * (self.c * undercooling).exp_m1()).max(0.0);
        let tau_0 = validation::finite("yield_strength", tau_0)?;
        self.sink
            .add_variable(YIELD_STRENGTH, state.current_position(), tau_0);
        Ok(Pascals::new(tau_0))
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
        "yield_strength_dragoni"
    }
}
