//! Core types: semantic units and the per-step flow state

pub mod state;
pub mod units;

pub use state::FlowState;
pub use units::*;
