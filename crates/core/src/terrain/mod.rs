//! Channel geometry and gravity along the flow path

mod slope_profile;
mod uniform;

pub use slope_profile::SlopeProfile;
pub use uniform::UniformChannel;

use crate::core_types::units::{Meters, MetersPerSecondSquared, Radians};

/// Geometry lookup by downflow position.
///
/// Lookups are infallible; submodels validate what they receive.
pub trait TerrainCondition: Send + Sync {
    /// Gravitational acceleration at `position`
    fn gravity(&self, position: Meters) -> MetersPerSecondSquared;

    /// Flow depth in the channel at `position`
    fn channel_depth(&self, position: Meters) -> Meters;

    /// Ground slope at `position` (positive downhill)
    fn channel_slope(&self, position: Meters) -> Radians;
}
