//! Crust cover fraction models
//!
//! # References
//! - Harris, A.J.L. & Rowland, S.K. (2001). "FLOWGO: a kinematic thermo-rheological
//!   model for lava flowing in a channel." Bulletin of Volcanology, 63, 20-44.

use super::EffectiveCoverCrustModel;
use crate::core_types::units::Fraction;
use crate::core_types::FlowState;
use serde::{Deserialize, Serialize};

/// Same cover fraction everywhere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantCover {
    /// Crust cover fraction
    pub fraction: Fraction,
}

impl ConstantCover {
    /// Cover fixed at `fraction`
    pub fn new(fraction: Fraction) -> Self {
        ConstantCover { fraction }
    }
}

impl EffectiveCoverCrustModel for ConstantCover {
    fn compute_effective_cover_fraction(&self, _state: &FlowState) -> Fraction {
        self.fraction
    }
}

/// Cover that changes with flow speed: fast flow tears the crust apart.
///
/// ```text
/// f = f₀ · exp(α · v)
/// ```
///
/// With α < 0 the crust thins as the flow accelerates. The result is clamped to
/// [0, 1] so positive α cannot produce a cover larger than the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityDependentCover {
    /// Cover of a stagnant flow
    pub base_fraction: Fraction,
    /// Exponential sensitivity to velocity (s/m)
    pub alpha: f64,
}

impl VelocityDependentCover {
    /// Cover model with given base fraction and sensitivity
    pub fn new(base_fraction: Fraction, alpha: f64) -> Self {
        VelocityDependentCover {
            base_fraction,
            alpha,
        }
    }
}

impl EffectiveCoverCrustModel for VelocityDependentCover {
    fn compute_effective_cover_fraction(&self, state: &FlowState) -> Fraction {
        let f = *self.base_fraction * (self.alpha * *state.velocity()).exp();
        Fraction::new(f.clamp(0.0, 1.0))
    }
}
