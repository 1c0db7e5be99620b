//! Surface heat flux submodels
//!
//! Every heat-loss formulation implements [`HeatFluxModel`], so the driver can
//! swap one for another without touching calling code.

pub(crate) mod radiation;
pub(crate) mod spectral;

pub use radiation::{
    mix_emissivity, mix_radiation_temperature, RadiationBreakdown, RadiationHeatFluxModel,
};
pub use spectral::{planck_spectral_exitance, pixel_spectral_radiance, SurfaceSample};

use crate::core_types::units::{Meters, WattsPerMeter};
use crate::core_types::FlowState;
use crate::error::FlowResult;

/// Heat lost by the channel per unit length
pub trait HeatFluxModel: Send + Sync {
    /// Heat loss at the current position (W per metre of channel)
    ///
    /// # Arguments
    /// * `state` - Flow snapshot at the current position
    /// * `channel_width` - Channel width (m), must be > 0
    /// * `channel_depth` - Flow depth (m); formulations that lose heat only through
    ///   the top surface ignore it
    fn compute_flux(
        &self,
        state: &FlowState,
        channel_width: Meters,
        channel_depth: Meters,
    ) -> FlowResult<WattsPerMeter>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}
