//! Semantic unit types for lava channel quantities
//!
//! Newtype wrappers keep temperatures, lengths, densities and stresses from being
//! mixed by accident when they flow between submodels.
//!
//! # Design Philosophy
//! - Every quantity is an `f64`: the radiation path raises temperatures to the
//!   fourth power and the yield-strength path uses fractional exponents
//! - `Deref` exposes the raw value so formulas read like the physics
//! - Total ordering via `f64::total_cmp` (NaN sorts above every value)
//! - Constructors do not validate; range checks live in [`crate::validation`] so
//!   they can return [`crate::FlowError`] instead of panicking
//! - Serde support for parameter files and diagnostic dumps
//!
//! # Usage
//! ```
//! use lava_flow_core::core_types::units::{Kelvin, Meters};
//!
//! let molten = Kelvin::new(1373.0);
//! let crust = Kelvin::new(773.0);
//! assert_eq!(molten.max(crust), molten);
//!
//! let width = Meters::new(10.0);
//! assert!((*width * 2.0 - 20.0).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Sub};

/// Declares an `f64` newtype with ordering, arithmetic, conversions and a
/// unit-suffixed `Display`.
macro_rules! scalar_unit {
    ($(#[$meta:meta])* $name:ident, $suffix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Wrap a raw value
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// Get the raw f64 value
            #[inline]
            #[must_use]
            pub const fn value(self) -> f64 {
                self.0
            }

            /// True when the wrapped value is neither NaN nor infinite
            #[inline]
            #[must_use]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Div<f64> for $name {
            type Output = $name;
            fn div(self, rhs: f64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*} {}", p, self.0, $suffix),
                    None => write!(f, "{} {}", self.0, $suffix),
                }
            }
        }
    };
}

// ============================================================================
// TEMPERATURE
// ============================================================================

scalar_unit!(
    /// Absolute temperature in Kelvin
    Kelvin,
    "K"
);

impl Kelvin {
    /// Celsius to Kelvin conversion offset (0°C = 273.15 K)
    const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

    /// Build from a Celsius reading
    #[inline]
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Kelvin(celsius + Self::CELSIUS_KELVIN_OFFSET)
    }

    /// Convert to degrees Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> f64 {
        self.0 - Self::CELSIUS_KELVIN_OFFSET
    }

    /// T⁴, the quantity radiative emission scales with
    #[inline]
    #[must_use]
    pub fn fourth_power(self) -> f64 {
        self.0.powi(4)
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

scalar_unit!(
    /// Length in meters (channel width/depth, downflow distance)
    Meters,
    "m"
);

scalar_unit!(
    /// Angle in radians
    Radians,
    "rad"
);

impl Radians {
    /// Build from an angle in degrees
    #[inline]
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Radians(degrees.to_radians())
    }

    /// Convert to degrees
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Sine of the angle
    #[inline]
    #[must_use]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }
}

// ============================================================================
// DIMENSIONLESS
// ============================================================================

scalar_unit!(
    /// Dimensionless fraction, physically meaningful in [0, 1]
    /// (crystal fraction, crust cover fraction, vesicularity)
    Fraction,
    ""
);

impl Fraction {
    /// Nothing
    pub const ZERO: Fraction = Fraction(0.0);
    /// Everything
    pub const ONE: Fraction = Fraction(1.0);

    /// 1 - f
    #[inline]
    #[must_use]
    pub fn complement(self) -> Fraction {
        Fraction(1.0 - self.0)
    }
}

// ============================================================================
// MATERIAL / FORCE / STRESS
// ============================================================================

scalar_unit!(
    /// Density in kg/m³
    KgPerCubicMeter,
    "kg/m³"
);

scalar_unit!(
    /// Acceleration in m/s² (gravity)
    MetersPerSecondSquared,
    "m/s²"
);

impl MetersPerSecondSquared {
    /// Standard gravity on Earth
    pub const STANDARD_GRAVITY: MetersPerSecondSquared = MetersPerSecondSquared(9.81);
}

scalar_unit!(
    /// Speed in m/s
    MetersPerSecond,
    "m/s"
);

scalar_unit!(
    /// Stress in pascals (yield strength, basal shear stress)
    Pascals,
    "Pa"
);

// ============================================================================
// RADIATION
// ============================================================================

scalar_unit!(
    /// Heat loss per unit channel length in W/m
    WattsPerMeter,
    "W/m"
);

scalar_unit!(
    /// Spectral radiance in W·m⁻²·µm⁻¹
    SpectralRadiance,
    "W/m²/µm"
);
