//! Lava Flow Core Library
//!
//! Pluggable physical submodels evaluated at each step of a channelized lava flow
//! simulation:
//! - Radiative heat loss from a surface mixing cool crust and hot molten lava
//!   (Stefan-Boltzmann with a T⁴-weighted effective temperature), plus a
//!   Planck-law spectral radiance diagnostic
//! - Yield strength (crystal-fraction power law, or undercooling law) and the
//!   gravity-driven basal shear stress it resists
//!
//! Formulations sit behind the [`HeatFluxModel`] and [`YieldStrengthModel`] traits
//! and receive their collaborators (terrain, lava material, crust models and a
//! diagnostic sink) by constructor injection.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use lava_flow_core::core_types::{Fraction, Kelvin, Meters};
//! use lava_flow_core::{
//!     BasicLava, ConstantCover, ConstantCrustTemperature, DiagnosticLog, FlowState,
//!     HeatFluxModel, ParameterFile, RadiationHeatFluxModel,
//! };
//!
//! let file = ParameterFile::from_json_str(r#"{
//!     "radiation_parameters": {
//!         "stefan-boltzmann_sigma": 5.67e-8, "epsilon_crust": 0.95, "epsilon_hot": 0.99
//!     }
//! }"#).unwrap();
//! let log = Arc::new(DiagnosticLog::new());
//! let model = RadiationHeatFluxModel::from_parameters(
//!     &file,
//!     Arc::new(BasicLava::basalt()),
//!     Arc::new(ConstantCrustTemperature::new(Kelvin::new(773.0))),
//!     Arc::new(ConstantCover::new(Fraction::new(0.5))),
//!     log.clone(),
//! ).unwrap();
//!
//! let state = FlowState::at_vent(Kelvin::new(1373.0), Fraction::new(0.2));
//! let q = model.compute_flux(&state, Meters::new(10.0), Meters::new(4.0)).unwrap();
//! assert!((*q - 1.0754e6).abs() / 1.0754e6 < 1e-3);
//! assert_eq!(log.len(), 3);
//! ```

// Core types and utilities
pub mod config;
pub mod core_types;
pub mod diagnostics;
pub mod error;
pub mod validation;

// Collaborators queried by the submodels
pub mod crust;
pub mod material;
pub mod terrain;

// Submodels and the step driver
pub mod channel;
pub mod flux;
pub mod rheology;

pub use channel::{StepEvaluator, StepResult};
pub use config::{ParameterFile, RadiationParameters, SpectralRadianceSettings, YieldStrengthParameters};
pub use core_types::FlowState;
pub use crust::{
    ConstantCover, ConstantCrustTemperature, CrustTemperatureModel, EffectiveCoverCrustModel,
    VelocityDependentCover,
};
pub use diagnostics::{DiagnosticLog, DiagnosticSample, DiagnosticSink, NullSink, TracingSink};
pub use error::{FlowError, FlowResult};
pub use flux::{HeatFluxModel, RadiationBreakdown, RadiationHeatFluxModel};
pub use material::{BasicLava, MaterialLava};
pub use rheology::{DragoniYieldStrength, RyersonYieldStrength, YieldStrengthModel};
pub use terrain::{SlopeProfile, TerrainCondition, UniformChannel};
