//! Bulk properties of the flowing lava

mod basic;

pub use basic::BasicLava;

use crate::core_types::units::{KgPerCubicMeter, Kelvin};
use crate::core_types::FlowState;

/// Lava properties evaluated for the current flow state
pub trait MaterialLava: Send + Sync {
    /// Density of the vesicular lava
    fn bulk_density(&self, state: &FlowState) -> KgPerCubicMeter;

    /// Temperature of the molten material exposed at cracks in the crust
    fn molten_material_temperature(&self, state: &FlowState) -> Kelvin;
}
