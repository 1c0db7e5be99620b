//! Yield strength and basal shear stress validation
//!
//! # Test Categories
//! 1. Ryerson power law: origin, monotonicity, reference value
//! 2. Basal shear stress: independent linearity in depth, density, gravity, sin θ
//! 3. Position handling of the terrain lookups
//!
//! Run tests with: `cargo test --test rheology_validation`

use approx::assert_relative_eq;
use lava_flow_core::core_types::{
    Fraction, KgPerCubicMeter, Kelvin, Meters, MetersPerSecondSquared, Radians,
};
use lava_flow_core::rheology::ryerson_yield_strength;
use lava_flow_core::{
    BasicLava, DiagnosticLog, FlowState, MaterialLava, NullSink, ParameterFile,
    RyersonYieldStrength, SlopeProfile, TerrainCondition, UniformChannel, YieldStrengthModel,
};
use std::sync::Arc;

fn ryerson(log: Arc<DiagnosticLog>) -> RyersonYieldStrength {
    let file = ParameterFile::from_json_str(r#"{"eruption_condition": {"eruption_temperature": 1387.15}}"#)
        .unwrap();
    RyersonYieldStrength::from_parameters(&file, log).unwrap()
}

fn state_at(position: f64, phi: f64) -> FlowState {
    FlowState::at_vent(Kelvin::new(1360.0), Fraction::new(phi)).with_position(Meters::new(position))
}

/// Lava of a given bulk density (no vesicles)
fn lava(density: f64) -> BasicLava {
    BasicLava::new(KgPerCubicMeter::new(density), Fraction::ZERO)
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: RYERSON POWER LAW
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_yield_strength_zero_without_crystals() {
    let model = ryerson(Arc::new(DiagnosticLog::new()));
    assert_eq!(*model.compute_yield_strength(&state_at(0.0, 0.0)).unwrap(), 0.0);
}

#[test]
fn test_yield_strength_strictly_increasing() {
    let mut previous = *ryerson_yield_strength(Fraction::ZERO);
    for i in 1..=1000 {
        let phi = f64::from(i) / 1000.0;
        let tau = *ryerson_yield_strength(Fraction::new(phi));
        assert!(tau > previous, "τ₀ not increasing at φ = {phi}");
        previous = tau;
    }
}

/// 6500 · 0.4^2.85
#[test]
fn test_yield_strength_reference_value() {
    let log = Arc::new(DiagnosticLog::new());
    let model = ryerson(log.clone());
    let tau = *model.compute_yield_strength(&state_at(42.0, 0.4)).unwrap();
    assert_relative_eq!(tau, 477.29, max_relative = 1e-3);
    assert_relative_eq!(tau, 6500.0 * 0.4f64.powf(2.85), max_relative = 1e-12);

    let sample = log.latest("tho_0").unwrap();
    assert_eq!(*sample.position, 42.0);
}

/// The eruption temperature is loaded even though the power law ignores it
#[test]
fn test_eruption_temperature_loaded() {
    let model = ryerson(Arc::new(DiagnosticLog::new()));
    assert_eq!(*model.parameters().eruption_temperature, 1387.15);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: BASAL SHEAR STRESS LINEARITY
// ═══════════════════════════════════════════════════════════════════════════════

fn tau_b(depth: f64, density: f64, gravity: f64, slope: f64) -> f64 {
    let model = RyersonYieldStrength::new(
        lava_flow_core::YieldStrengthParameters {
            eruption_temperature: Kelvin::new(1387.0),
        },
        Arc::new(NullSink),
    )
    .unwrap();
    let terrain = UniformChannel::new(Meters::new(depth), Radians::new(slope))
        .with_gravity(MetersPerSecondSquared::new(gravity));
    *model
        .compute_basal_shear_stress(&state_at(0.0, 0.2), &terrain, &lava(density))
        .unwrap()
}

#[test]
fn test_basal_shear_linear_in_depth() {
    let base = tau_b(1.0, 2500.0, 9.81, 0.1);
    for k in [0.5, 2.0, 3.7, 10.0] {
        assert_relative_eq!(tau_b(k, 2500.0, 9.81, 0.1), base * k, max_relative = 1e-12);
    }
}

#[test]
fn test_basal_shear_linear_in_density() {
    let base = tau_b(3.0, 1000.0, 9.81, 0.1);
    for k in [0.8, 2.0, 2.7] {
        assert_relative_eq!(tau_b(3.0, 1000.0 * k, 9.81, 0.1), base * k, max_relative = 1e-12);
    }
}

#[test]
fn test_basal_shear_linear_in_gravity() {
    let base = tau_b(3.0, 2500.0, 1.0, 0.1);
    for g in [1.62, 3.71, 9.81] {
        assert_relative_eq!(tau_b(3.0, 2500.0, g, 0.1), base * g, max_relative = 1e-12);
    }
}

#[test]
fn test_basal_shear_linear_in_sine_of_slope() {
    let per_unit_sine = tau_b(3.0, 2500.0, 9.81, std::f64::consts::FRAC_PI_2);
    for degrees in [1.0, 5.0, 12.0, 30.0] {
        let slope = f64::to_radians(degrees);
        assert_relative_eq!(
            tau_b(3.0, 2500.0, 9.81, slope),
            per_unit_sine * slope.sin(),
            max_relative = 1e-12
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: TERRAIN LOOKUPS USE THE CURRENT POSITION
// ═══════════════════════════════════════════════════════════════════════════════

/// Gravity that changes along the flow path, to prove every terrain lookup is made
/// at the state's evaluated position
struct GravityGradient;

impl TerrainCondition for GravityGradient {
    fn gravity(&self, position: Meters) -> MetersPerSecondSquared {
        MetersPerSecondSquared::new(1.0 + *position / 100.0)
    }

    fn channel_depth(&self, _position: Meters) -> Meters {
        Meters::new(2.0)
    }

    fn channel_slope(&self, _position: Meters) -> Radians {
        Radians::from_degrees(30.0)
    }
}

#[test]
fn test_gravity_looked_up_at_current_position() {
    let model = ryerson(Arc::new(DiagnosticLog::new()));
    let material = lava(2000.0);
    for position in [0.0, 100.0, 450.0] {
        let tau = *model
            .compute_basal_shear_stress(&state_at(position, 0.2), &GravityGradient, &material)
            .unwrap();
        let g = 1.0 + position / 100.0;
        assert_relative_eq!(tau, 2.0 * 2000.0 * g * 0.5, max_relative = 1e-12);
    }
}

#[test]
fn test_slope_profile_drives_basal_shear() {
    let model = ryerson(Arc::new(DiagnosticLog::new()));
    let profile = SlopeProfile::from_degrees(&[(0.0, 10.0), (1000.0, 2.0)], Meters::new(3.0)).unwrap();
    let material = lava(2600.0);

    let steep = model
        .compute_basal_shear_stress(&state_at(0.0, 0.2), &profile, &material)
        .unwrap();
    let gentle = model
        .compute_basal_shear_stress(&state_at(1000.0, 0.2), &profile, &material)
        .unwrap();
    assert!(steep > gentle);
    assert_relative_eq!(
        *gentle,
        3.0 * *material.bulk_density(&state_at(0.0, 0.2)) * 9.81 * 2.0f64.to_radians().sin(),
        max_relative = 1e-12
    );
}
