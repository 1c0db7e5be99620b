//! Radiative heat loss from a partially crusted channel surface
//!
//! The surface is a mosaic of crust (cover fraction f, temperature T_c, emissivity ε₁)
//! and exposed molten lava (1 − f, T_m, ε₂). Emission scales with T⁴, so the two
//! temperatures are mixed in T⁴ rather than linearly.
//!
//! # Formula
//! ```text
//! T_eff = (f T_c⁴ + (1 − f) T_m⁴)^¼
//! ε_eff = f ε₁ + (1 − f) ε₂
//! q_rad = σ ε_eff T_eff⁴ w
//! ```
//!
//! # References
//! - Pieri, D.C. & Baloga, S.M. (1986). "Eruption rate, area, and length
//!   relationships for some Hawaiian lava flows." JVGR, 30, 29-45
//! - Crisp, J. & Baloga, S. (1990). "A model for lava flows with two thermal
//!   components." JGR, 95(B2), 1255-1270
//! - Harris, A.J.L. & Rowland, S.K. (2001). FLOWGO, Bull. Volcanol., 63, 20-44

use super::spectral::{pixel_spectral_radiance, SurfaceSample};
use super::HeatFluxModel;
use crate::config::{ParameterFile, RadiationParameters, SpectralRadianceSettings};
use crate::core_types::units::{Fraction, Kelvin, Meters, SpectralRadiance, WattsPerMeter};
use crate::core_types::FlowState;
use crate::crust::{CrustTemperatureModel, EffectiveCoverCrustModel};
use crate::diagnostics::DiagnosticSink;
use crate::error::FlowResult;
use crate::material::MaterialLava;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Diagnostic variable names
const EFFECTIVE_RADIATION_TEMPERATURE: &str = "effective_radiation_temperature";
const EPSILON_EFFECTIVE: &str = "epsilon_effective";
const SPECTRAL_RADIANCE: &str = "spectral_radiance";

/// Area-weighted T⁴ mix of crust and molten temperatures.
///
/// For `cover` in [0, 1] and positive temperatures the result lies between the two
/// inputs; it equals `crust` at `cover = 1` and `molten` at `cover = 0`.
/// No validation: callers outside this module should go through
/// [`RadiationHeatFluxModel::effective_radiation_temperature`].
#[inline]
pub fn mix_radiation_temperature(cover: Fraction, crust: Kelvin, molten: Kelvin) -> Kelvin {
    let f = *cover;
    Kelvin::new((f * crust.fourth_power() + (1.0 - f) * molten.fourth_power()).powf(0.25))
}

/// Area-weighted linear mix of crust and molten emissivities
#[inline]
pub fn mix_emissivity(cover: Fraction, epsilon_crust: f64, epsilon_hot: f64) -> f64 {
    let f = *cover;
    f * epsilon_crust + (1.0 - f) * epsilon_hot
}

/// Everything the radiation model computed at one position.
///
/// `spectral_radiance` is a sensor-side diagnostic and is not part of `flux`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiationBreakdown {
    /// Radiative heat loss per metre of channel
    pub flux: WattsPerMeter,
    /// Single temperature radiating like the mixed surface
    pub effective_radiation_temperature: Kelvin,
    /// Area-weighted emissivity
    pub epsilon_effective: f64,
    /// Pixel spectral radiance at the sensor
    pub spectral_radiance: SpectralRadiance,
    /// Surface composition the values were computed from
    pub surface: SurfaceSample,
}

/// Radiative heat flux with separate crust and molten emissivities
pub struct RadiationHeatFluxModel {
    parameters: RadiationParameters,
    spectral: SpectralRadianceSettings,
    material: Arc<dyn MaterialLava>,
    crust_temperature: Arc<dyn CrustTemperatureModel>,
    cover: Arc<dyn EffectiveCoverCrustModel>,
    sink: Arc<dyn DiagnosticSink>,
}

impl RadiationHeatFluxModel {
    /// Build from already-loaded parameters with default spectral settings
    pub fn new(
        parameters: RadiationParameters,
        material: Arc<dyn MaterialLava>,
        crust_temperature: Arc<dyn CrustTemperatureModel>,
        cover: Arc<dyn EffectiveCoverCrustModel>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> FlowResult<Self> {
        parameters.validate()?;
        Ok(RadiationHeatFluxModel {
            parameters,
            spectral: SpectralRadianceSettings::default(),
            material,
            crust_temperature,
            cover,
            sink,
        })
    }

    /// Build from the `radiation_parameters` (required) and `spectral_radiance`
    /// (optional) sections of a parameter file
    pub fn from_parameters(
        file: &ParameterFile,
        material: Arc<dyn MaterialLava>,
        crust_temperature: Arc<dyn CrustTemperatureModel>,
        cover: Arc<dyn EffectiveCoverCrustModel>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> FlowResult<Self> {
        let parameters = file.radiation_parameters()?;
        let spectral = file.spectral_settings()?;
        info!(
            sigma = parameters.sigma,
            epsilon_crust = parameters.epsilon_crust,
            epsilon_hot = parameters.epsilon_hot,
            "radiation heat flux model configured"
        );
        Ok(Self::new(parameters, material, crust_temperature, cover, sink)?
            .with_spectral_settings(spectral))
    }

    /// Replace the spectral-radiance diagnostic settings
    pub fn with_spectral_settings(self, spectral: SpectralRadianceSettings) -> Self {
        RadiationHeatFluxModel { spectral, ..self }
    }

    /// Loaded radiation constants
    pub fn parameters(&self) -> &RadiationParameters {
        &self.parameters
    }

    /// Spectral-radiance diagnostic settings
    pub fn spectral_settings(&self) -> &SpectralRadianceSettings {
        &self.spectral
    }

    fn cover_fraction(&self, state: &FlowState) -> FlowResult<Fraction> {
        let cover = self.cover.compute_effective_cover_fraction(state);
        validation::unit_interval("effective_cover_fraction", *cover)?;
        Ok(cover)
    }

    fn sample_surface(&self, state: &FlowState) -> FlowResult<SurfaceSample> {
        let cover = self.cover_fraction(state)?;
        let crust_temperature = self.crust_temperature.compute_crust_temperature(state);
        validation::positive("crust_temperature", *crust_temperature)?;
        let molten_temperature = self.material.molten_material_temperature(state);
        validation::positive("molten_material_temperature", *molten_temperature)?;
        Ok(SurfaceSample {
            cover,
            crust_temperature,
            molten_temperature,
        })
    }

    fn record(&self, name: &str, state: &FlowState, value: f64) {
        self.sink.add_variable(name, state.current_position(), value);
    }

    fn mixed_temperature(surface: &SurfaceSample) -> FlowResult<Kelvin> {
        let t_eff = mix_radiation_temperature(
            surface.cover,
            surface.crust_temperature,
            surface.molten_temperature,
        );
        validation::finite(EFFECTIVE_RADIATION_TEMPERATURE, *t_eff)?;
        Ok(t_eff)
    }

    fn mixed_emissivity(&self, cover: Fraction) -> FlowResult<f64> {
        let epsilon = mix_emissivity(
            cover,
            self.parameters.epsilon_crust,
            self.parameters.epsilon_hot,
        );
        validation::finite(EPSILON_EFFECTIVE, epsilon)
    }

    fn pixel_radiance(
        &self,
        surface: &SurfaceSample,
        channel_width: Meters,
    ) -> FlowResult<SpectralRadiance> {
        let radiance = pixel_spectral_radiance(
            &self.spectral,
            surface,
            self.parameters.epsilon_crust,
            self.parameters.epsilon_hot,
            channel_width,
        );
        validation::finite(SPECTRAL_RADIANCE, *radiance)?;
        Ok(radiance)
    }

    /// Effective radiation temperature of the mixed surface. Logged.
    pub fn effective_radiation_temperature(&self, state: &FlowState) -> FlowResult<Kelvin> {
        let surface = self.sample_surface(state)?;
        let t_eff = Self::mixed_temperature(&surface)?;
        self.record(EFFECTIVE_RADIATION_TEMPERATURE, state, *t_eff);
        Ok(t_eff)
    }

    /// Area-weighted emissivity of the mixed surface. Logged.
    pub fn epsilon_effective(&self, state: &FlowState) -> FlowResult<f64> {
        let cover = self.cover_fraction(state)?;
        let epsilon = self.mixed_emissivity(cover)?;
        self.record(EPSILON_EFFECTIVE, state, epsilon);
        Ok(epsilon)
    }

    /// Pixel spectral radiance seen by a sensor (W·m⁻²·µm⁻¹). Logged, never
    /// folded into the heat flux.
    pub fn spectral_radiance(
        &self,
        state: &FlowState,
        channel_width: Meters,
    ) -> FlowResult<SpectralRadiance> {
        validation::positive("channel_width", *channel_width)?;
        let surface = self.sample_surface(state)?;
        let radiance = self.pixel_radiance(&surface, channel_width)?;
        self.record(SPECTRAL_RADIANCE, state, *radiance);
        Ok(radiance)
    }

    /// Heat flux plus every intermediate quantity.
    ///
    /// Every value is computed and checked first; only a successful call records
    /// the effective radiation temperature, effective emissivity and spectral
    /// radiance, in that order. A failed call records nothing.
    pub fn compute_flux_breakdown(
        &self,
        state: &FlowState,
        channel_width: Meters,
    ) -> FlowResult<RadiationBreakdown> {
        validation::positive("channel_width", *channel_width)?;
        let surface = self.sample_surface(state)?;

        let effective_radiation_temperature = Self::mixed_temperature(&surface)?;
        let epsilon_effective = self.mixed_emissivity(surface.cover)?;
        let q = self.parameters.sigma
            * epsilon_effective
            * effective_radiation_temperature.fourth_power()
            * *channel_width;
        validation::finite("radiative_flux", q)?;
        let spectral_radiance = self.pixel_radiance(&surface, channel_width)?;

        self.record(EFFECTIVE_RADIATION_TEMPERATURE, state, *effective_radiation_temperature);
        self.record(EPSILON_EFFECTIVE, state, epsilon_effective);
        self.record(SPECTRAL_RADIANCE, state, *spectral_radiance);

        Ok(RadiationBreakdown {
            flux: WattsPerMeter::new(q),
            effective_radiation_temperature,
            epsilon_effective,
            spectral_radiance,
            surface,
        })
    }
}

impl HeatFluxModel for RadiationHeatFluxModel {
    fn compute_flux(
        &self,
        state: &FlowState,
        channel_width: Meters,
        _channel_depth: Meters,
    ) -> FlowResult<WattsPerMeter> {
        self.compute_flux_breakdown(state, channel_width)
            .map(|breakdown| breakdown.flux)
    }

    fn name(&self) -> &'static str {
        "radiation_heat_emissivity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::MetersPerSecond;
    use crate::crust::{ConstantCover, ConstantCrustTemperature, VelocityDependentCover};
    use crate::diagnostics::DiagnosticLog;
    use crate::error::FlowError;
    use crate::material::BasicLava;
    use approx::assert_relative_eq;
    use std::sync::Mutex;

    fn params() -> RadiationParameters {
        RadiationParameters {
            sigma: 5.67e-8,
            epsilon_crust: 0.95,
            epsilon_hot: 0.99,
        }
    }

    fn model_with(
        cover: Arc<dyn EffectiveCoverCrustModel>,
        crust: f64,
    ) -> (RadiationHeatFluxModel, Arc<DiagnosticLog>) {
        let log = Arc::new(DiagnosticLog::new());
        let model = RadiationHeatFluxModel::new(
            params(),
            Arc::new(BasicLava::basalt()),
            Arc::new(ConstantCrustTemperature::new(Kelvin::new(crust))),
            cover,
            log.clone(),
        )
        .unwrap();
        (model, log)
    }

    fn reference_model() -> (RadiationHeatFluxModel, Arc<DiagnosticLog>) {
        model_with(Arc::new(ConstantCover::new(Fraction::new(0.5))), 773.0)
    }

    fn state() -> FlowState {
        FlowState::at_vent(Kelvin::new(1373.0), Fraction::new(0.2))
            .with_position(Meters::new(120.0))
    }

    #[test]
    fn test_reference_effective_temperature() {
        let (model, log) = reference_model();
        let t = model.effective_radiation_temperature(&state()).unwrap();
        assert_relative_eq!(*t, 1182.5175, max_relative = 1e-6);

        let sample = log.latest(EFFECTIVE_RADIATION_TEMPERATURE).unwrap();
        assert_eq!(*sample.position, 120.0);
        assert_eq!(sample.value, *t);
    }

    #[test]
    fn test_reference_epsilon() {
        let (model, log) = reference_model();
        assert_relative_eq!(model.epsilon_effective(&state()).unwrap(), 0.97, epsilon = 1e-12);
        assert_eq!(log.series(EPSILON_EFFECTIVE).len(), 1);
    }

    #[test]
    fn test_reference_flux() {
        let (model, _) = reference_model();
        let q = model
            .compute_flux(&state(), Meters::new(10.0), Meters::new(4.0))
            .unwrap();
        assert_relative_eq!(*q, 1.075437e6, max_relative = 1e-5);
    }

    /// Keeps every sample name in arrival order
    #[derive(Default)]
    struct OrderedSink {
        names: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for OrderedSink {
        fn add_variable(&self, name: &str, _position: Meters, _value: f64) {
            self.names.lock().unwrap().push(name.to_owned());
        }
    }

    fn ordered_model() -> (RadiationHeatFluxModel, Arc<OrderedSink>) {
        let sink = Arc::new(OrderedSink::default());
        let model = RadiationHeatFluxModel::new(
            params(),
            Arc::new(BasicLava::basalt()),
            Arc::new(ConstantCrustTemperature::new(Kelvin::new(773.0))),
            Arc::new(ConstantCover::new(Fraction::new(0.5))),
            sink.clone(),
        )
        .unwrap();
        (model, sink)
    }

    #[test]
    fn test_flux_logs_all_three_diagnostics_in_order() {
        let (model, sink) = ordered_model();
        model
            .compute_flux(&state(), Meters::new(10.0), Meters::new(4.0))
            .unwrap();
        model
            .compute_flux(&state(), Meters::new(12.0), Meters::new(4.0))
            .unwrap();
        assert_eq!(
            *sink.names.lock().unwrap(),
            vec![
                EFFECTIVE_RADIATION_TEMPERATURE,
                EPSILON_EFFECTIVE,
                SPECTRAL_RADIANCE,
                EFFECTIVE_RADIATION_TEMPERATURE,
                EPSILON_EFFECTIVE,
                SPECTRAL_RADIANCE,
            ]
        );
    }

    #[test]
    fn test_overflowing_temperature_is_a_domain_violation() {
        let (model, log) = reference_model();
        let scorching = FlowState::at_vent(Kelvin::new(1e100), Fraction::new(0.2));

        match model.effective_radiation_temperature(&scorching) {
            Err(FlowError::DomainViolation { quantity, value, .. }) => {
                assert_eq!(quantity, EFFECTIVE_RADIATION_TEMPERATURE);
                assert!(value.is_infinite());
            }
            other => panic!("expected domain violation, got {other:?}"),
        }
        assert!(model
            .compute_flux(&scorching, Meters::new(10.0), Meters::new(4.0))
            .is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn test_failed_flux_records_nothing() {
        let (model, sink) = ordered_model();
        let huge_width = Meters::new(1e306);
        assert!(model
            .compute_flux(&state(), huge_width, Meters::new(4.0))
            .is_err());
        assert!(sink.names.lock().unwrap().is_empty());
    }

    #[test]
    fn test_spectral_radiance_not_in_flux() {
        let (model, _) = reference_model();
        let b = model.compute_flux_breakdown(&state(), Meters::new(10.0)).unwrap();
        let expected = 5.67e-8 * b.epsilon_effective * b.effective_radiation_temperature.fourth_power() * 10.0;
        assert_relative_eq!(*b.flux, expected, max_relative = 1e-12);
        assert_relative_eq!(*b.spectral_radiance, 567.724, max_relative = 1e-5);
    }

    #[test]
    fn test_channel_depth_ignored() {
        let (model, _) = reference_model();
        let shallow = model.compute_flux(&state(), Meters::new(10.0), Meters::new(0.5)).unwrap();
        let deep = model.compute_flux(&state(), Meters::new(10.0), Meters::new(50.0)).unwrap();
        assert_eq!(shallow, deep);
    }

    #[test]
    fn test_full_cover_radiates_at_crust_temperature() {
        let (model, _) = model_with(Arc::new(ConstantCover::new(Fraction::ONE)), 773.0);
        let t = model.effective_radiation_temperature(&state()).unwrap();
        assert_relative_eq!(*t, 773.0, max_relative = 1e-12);
        assert_relative_eq!(model.epsilon_effective(&state()).unwrap(), 0.95);
    }

    #[test]
    fn test_velocity_cover_feeds_through() {
        let (model, _) = model_with(
            Arc::new(VelocityDependentCover::new(Fraction::new(0.9), -0.16)),
            773.0,
        );
        let slow = model
            .compute_flux(&state(), Meters::new(10.0), Meters::new(4.0))
            .unwrap();
        let fast = model
            .compute_flux(
                &state().with_velocity(MetersPerSecond::new(5.0)),
                Meters::new(10.0),
                Meters::new(4.0),
            )
            .unwrap();
        // Less crust exposes more hot lava
        assert!(fast > slow);
    }

    #[test]
    fn test_rejects_bad_cover() {
        let (model, log) = model_with(Arc::new(ConstantCover::new(Fraction::new(1.5))), 773.0);
        let err = model
            .compute_flux(&state(), Meters::new(10.0), Meters::new(4.0))
            .unwrap_err();
        assert!(matches!(
            err,
            FlowError::DomainViolation { quantity: "effective_cover_fraction", .. }
        ));
        assert!(log.is_empty());
    }

    #[test]
    fn test_rejects_non_positive_temperature_and_width() {
        let (model, _) = model_with(Arc::new(ConstantCover::new(Fraction::new(0.5))), 0.0);
        assert!(model.effective_radiation_temperature(&state()).is_err());

        let (model, _) = reference_model();
        assert!(model
            .compute_flux(&state(), Meters::new(0.0), Meters::new(4.0))
            .is_err());
        assert!(model.spectral_radiance(&state(), Meters::new(-1.0)).is_err());
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let bad = RadiationParameters {
            epsilon_hot: 0.0,
            ..params()
        };
        let result = RadiationHeatFluxModel::new(
            bad,
            Arc::new(BasicLava::basalt()),
            Arc::new(ConstantCrustTemperature::new(Kelvin::new(773.0))),
            Arc::new(ConstantCover::new(Fraction::new(0.5))),
            Arc::new(DiagnosticLog::new()),
        );
        assert!(result.is_err());
    }
}
