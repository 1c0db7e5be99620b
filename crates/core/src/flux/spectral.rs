//! Spectral radiance of a pixel containing a lava channel
//!
//! Diagnostic only: estimates what a thermal-infrared sensor with a square pixel
//! would see when the channel runs across it. The heat-loss result never
//! depends on it.
//!
//! # Formula
//! ```text
//! M(λ, T) = C₁ λ⁻⁵ / (exp(C₂ / (λ T)) − 1)       C₁ = 2πhc², C₂ = hc/k
//!
//! L = τ [ ε₂ P_hot M(λ, T_m) + ε₁ P_crust M(λ, T_c) + (1 − P_hot − P_crust) ε₃ M(λ, T_b) ]
//! ```
//!
//! Where:
//! - **P_hot**, **P_crust** = pixel area fractions of molten and crusted lava
//! - **τ** = atmospheric transmissivity
//! - **ε₃**, **T_b** = background emissivity and temperature
//!
//! # References
//! - Planck, M. (1901). "Ueber das Gesetz der Energieverteilung im Normalspectrum"
//! - Wright, R., Flynn, L.P. & Harris, A.J.L. (2001). "Evolution of lava flow-fields
//!   at Mount Etna, 27-28 October 1999, observed by Landsat 7 ETM+"

use crate::config::SpectralRadianceSettings;
use crate::core_types::units::{Fraction, Kelvin, Meters, SpectralRadiance};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Planck constant (J·s)
const PLANCK: f64 = 6.6256e-34;
/// Speed of light (m/s)
const SPEED_OF_LIGHT: f64 = 2.9979e8;
/// Boltzmann constant (J/K)
const BOLTZMANN: f64 = 1.38e-23;

const MICROMETERS_PER_METER: f64 = 1.0e6;

/// What the radiating surface is made of at one position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSample {
    /// Fraction of the surface covered by crust
    pub cover: Fraction,
    /// Crust temperature
    pub crust_temperature: Kelvin,
    /// Temperature of the exposed molten material
    pub molten_temperature: Kelvin,
}

/// Blackbody spectral exitance (W·m⁻²·m⁻¹) at `wavelength` metres.
pub fn planck_spectral_exitance(wavelength: f64, temperature: Kelvin) -> f64 {
    let c1 = 2.0 * PI * PLANCK * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
    let c2 = PLANCK * SPEED_OF_LIGHT / BOLTZMANN;
    c1 * wavelength.powi(-5) / ((c2 / (wavelength * *temperature)).exp_m1())
}

/// Spectral radiance at the sensor for a pixel crossed by a channel of
/// `channel_width`.
///
/// The channel covers `width / pixel_size` of the pixel. That share is not
/// clamped unless `settings.cap_lava_fraction` is set, so a channel wider than the
/// pixel gives a negative background weight.
pub fn pixel_spectral_radiance(
    settings: &SpectralRadianceSettings,
    surface: &SurfaceSample,
    epsilon_crust: f64,
    epsilon_hot: f64,
    channel_width: Meters,
) -> SpectralRadiance {
    let wavelength = settings.wavelength_um / MICROMETERS_PER_METER;

    // A_lava / A_pixel = (L · w) / L²
    let mut lava_fraction = *channel_width / *settings.pixel_size;
    if settings.cap_lava_fraction {
        lava_fraction = lava_fraction.min(1.0);
    }
    let p_hot = lava_fraction * *surface.cover.complement();
    let p_crust = lava_fraction * *surface.cover;
    let p_background = 1.0 - p_hot - p_crust;

    let molten = planck_spectral_exitance(wavelength, surface.molten_temperature);
    let crust = planck_spectral_exitance(wavelength, surface.crust_temperature);
    let background = planck_spectral_exitance(wavelength, settings.background_temperature);

    let per_meter = *settings.atmospheric_transmissivity
        * (epsilon_hot * p_hot * molten
            + epsilon_crust * p_crust * crust
            + p_background * settings.background_emissivity * background);

    SpectralRadiance::new(per_meter / MICROMETERS_PER_METER)
}
