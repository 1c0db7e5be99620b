//! Boundary checks shared by the submodels
//!
//! Every public operation validates its inputs here before doing arithmetic, and
//! checks its result with [`finite`] before returning it, so NaN and infinity never
//! reach the integrator.

use crate::error::{FlowError, FlowResult};

/// Value must be neither NaN nor infinite
#[inline]
pub fn finite(quantity: &'static str, value: f64) -> FlowResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FlowError::domain(quantity, value, "must be finite"))
    }
}

/// Value must be finite and strictly positive (temperatures, widths, densities)
#[inline]
pub fn positive(quantity: &'static str, value: f64) -> FlowResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FlowError::domain(quantity, value, "must be finite and > 0"))
    }
}

/// Value must be finite and not negative (depths)
#[inline]
pub fn non_negative(quantity: &'static str, value: f64) -> FlowResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FlowError::domain(quantity, value, "must be finite and >= 0"))
    }
}

/// Value must lie in the closed unit interval (cover and crystal fractions)
#[inline]
pub fn unit_interval(quantity: &'static str, value: f64) -> FlowResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(FlowError::domain(quantity, value, "must lie in [0, 1]"))
    }
}

/// Value must lie in (0, 1] (emissivities)
#[inline]
pub fn emissivity(quantity: &'static str, value: f64) -> FlowResult<f64> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(FlowError::domain(quantity, value, "must lie in (0, 1]"))
    }
}
