//! JSON parameter file loading
//!
//! The parameter file is one JSON object with a section per concern:
//!
//! ```json
//! {
//!   "radiation_parameters": {
//!     "stefan-boltzmann_sigma": 5.67e-8,
//!     "epsilon_crust": 0.95,
//!     "epsilon_hot": 0.99
//!   },
//!   "eruption_condition": { "eruption_temperature": 1387.15 },
//!   "spectral_radiance": { "wavelength_um": 0.8675 }
//! }
//! ```
//!
//! Sections are extracted on demand, so a model only fails to load when the section
//! *it* needs is missing or malformed. `spectral_radiance` is optional and every
//! field in it falls back to its default.

use crate::core_types::units::{Fraction, Kelvin, Meters};
use crate::error::{FlowError, FlowResult};
use crate::validation;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Section holding the radiation constants
pub const RADIATION_SECTION: &str = "radiation_parameters";
/// Section holding the vent conditions
pub const ERUPTION_SECTION: &str = "eruption_condition";
/// Optional section overriding the spectral-radiance diagnostic settings
pub const SPECTRAL_SECTION: &str = "spectral_radiance";

/// Parsed parameter file
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterFile {
    root: Value,
}

impl ParameterFile {
    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> FlowResult<Self> {
        let root: Value = serde_json::from_str(json)
            .map_err(|e| FlowError::configuration("<document>", e.to_string()))?;
        Self::from_value(root)
    }

    /// Wrap an already-parsed document. The root must be an object.
    pub fn from_value(root: Value) -> FlowResult<Self> {
        if !root.is_object() {
            return Err(FlowError::configuration(
                "<document>",
                "parameter file must be a JSON object",
            ));
        }
        Ok(ParameterFile { root })
    }

    /// Read and parse a parameter file from disk
    pub fn from_path(path: impl AsRef<Path>) -> FlowResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FlowError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded parameter file");
        Self::from_json_str(&text)
    }

    /// Deserialize a required section
    fn section<T: DeserializeOwned>(&self, name: &str) -> FlowResult<T> {
        let value = self
            .root
            .get(name)
            .ok_or_else(|| FlowError::configuration(name, "section is missing"))?;
        T::deserialize(value).map_err(|e| FlowError::configuration(name, e.to_string()))
    }

    /// Deserialize an optional section
    fn optional_section<T: DeserializeOwned>(&self, name: &str) -> FlowResult<Option<T>> {
        match self.root.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|e| FlowError::configuration(name, e.to_string())),
        }
    }

    /// `radiation_parameters`, validated
    pub fn radiation_parameters(&self) -> FlowResult<RadiationParameters> {
        let params: RadiationParameters = self.section(RADIATION_SECTION)?;
        params.validate()?;
        Ok(params)
    }

    /// `eruption_condition`, validated
    pub fn yield_strength_parameters(&self) -> FlowResult<YieldStrengthParameters> {
        let params: YieldStrengthParameters = self.section(ERUPTION_SECTION)?;
        params.validate()?;
        Ok(params)
    }

    /// `spectral_radiance`, or the defaults when the section is absent
    pub fn spectral_settings(&self) -> FlowResult<SpectralRadianceSettings> {
        let settings = self
            .optional_section::<SpectralRadianceSettings>(SPECTRAL_SECTION)?
            .unwrap_or_default();
        settings.validate()?;
        Ok(settings)
    }
}

/// Re-tag a domain violation found while validating a parameter as a
/// configuration error on its dotted key.
fn check(section: &str, field: &str, result: FlowResult<f64>) -> FlowResult<()> {
    result.map(|_| ()).map_err(|e| match e {
        FlowError::DomainViolation {
            value, constraint, ..
        } => FlowError::configuration(
            format!("{section}.{field}"),
            format!("{value} {constraint}"),
        ),
        other => other,
    })
}

/// Radiation constants, loaded once and immutable for the run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiationParameters {
    /// Stefan-Boltzmann constant σ (W·m⁻²·K⁻⁴)
    #[serde(rename = "stefan-boltzmann_sigma")]
    pub sigma: f64,
    /// Emissivity of the solid crust ε₁, in (0, 1]
    pub epsilon_crust: f64,
    /// Emissivity of exposed molten lava ε₂, in (0, 1]
    pub epsilon_hot: f64,
}

impl RadiationParameters {
    /// Check physical ranges
    pub fn validate(&self) -> FlowResult<()> {
        check(
            RADIATION_SECTION,
            "stefan-boltzmann_sigma",
            validation::positive("sigma", self.sigma),
        )?;
        check(
            RADIATION_SECTION,
            "epsilon_crust",
            validation::emissivity("epsilon_crust", self.epsilon_crust),
        )?;
        check(
            RADIATION_SECTION,
            "epsilon_hot",
            validation::emissivity("epsilon_hot", self.epsilon_hot),
        )
    }
}

impl Default for RadiationParameters {
    fn default() -> Self {
        RadiationParameters {
            sigma: 5.67e-8,
            epsilon_crust: 0.95,
            epsilon_hot: 0.95,
        }
    }
}

/// Vent conditions used by the yield-strength models
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldStrengthParameters {
    /// Temperature at the vent (K), the reference temperature for
    /// temperature-dependent yield strength laws
    pub eruption_temperature: Kelvin,
}

impl YieldStrengthParameters {
    /// Check physical ranges
    pub fn validate(&self) -> FlowResult<()> {
        check(
            ERUPTION_SECTION,
            "eruption_temperature",
            validation::positive("eruption_temperature", *self.eruption_temperature),
        )
    }
}

/// Fixed inputs of the spectral-radiance diagnostic.
///
/// The defaults describe a 30 m thermal-infrared pixel observed at 0.8675 µm
/// through a fairly clear atmosphere over a snow-covered background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectralRadianceSettings {
    /// Observation wavelength (µm)
    pub wavelength_um: f64,
    /// Ground-sample distance: side of a square pixel
    pub pixel_size: Meters,
    /// Temperature of the ground around the channel
    pub background_temperature: Kelvin,
    /// Emissivity of the ground around the channel
    pub background_emissivity: f64,
    /// Fraction of surface radiance reaching the sensor
    pub atmospheric_transmissivity: Fraction,
    /// Clamp the channel's share of the pixel to 1 when the channel is wider than
    /// the pixel. Off by default: the reference formula lets `w / pixel_size`
    /// exceed 1, which drives the background weight negative.
    pub cap_lava_fraction: bool,
}

impl Default for SpectralRadianceSettings {
    fn default() -> Self {
        SpectralRadianceSettings {
            wavelength_um: 0.8675,
            pixel_size: Meters::new(30.0),
            background_temperature: Kelvin::new(258.0),
            background_emissivity: 0.1,
            atmospheric_transmissivity: Fraction::new(0.8),
            cap_lava_fraction: false,
        }
    }
}

impl SpectralRadianceSettings {
    /// Check physical ranges
    pub fn validate(&self) -> FlowResult<()> {
        check(
            SPECTRAL_SECTION,
            "wavelength_um",
            validation::positive("wavelength_um", self.wavelength_um),
        )?;
        check(
            SPECTRAL_SECTION,
            "pixel_size",
            validation::positive("pixel_size", *self.pixel_size),
        )?;
        check(
            SPECTRAL_SECTION,
            "background_temperature",
            validation::positive("background_temperature", *self.background_temperature),
        )?;
        check(
            SPECTRAL_SECTION,
            "background_emissivity",
            validation::emissivity("background_emissivity", self.background_emissivity),
        )?;
        check(
            SPECTRAL_SECTION,
            "atmospheric_transmissivity",
            validation::unit_interval(
                "atmospheric_transmissivity",
                *self.atmospheric_transmissivity,
            ),
        )
    }
}
