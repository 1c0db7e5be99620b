//! Diagnostic sinks for per-position model variables
//!
//! Submodels record intermediate quantities (effective radiation temperature,
//! yield strength, ...) keyed by variable name and downflow position. The sink is
//! injected into each model at construction, so every run owns its own log and
//! tests can inspect exactly what a model recorded.
//!
//! Runtime logging (model construction, configuration) goes through `tracing`;
//! this module is only for the scientific series a run produces.

use crate::core_types::units::Meters;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use tracing::trace;

/// Append-only receiver of diagnostic samples.
///
/// `add_variable` must not fail for finite input; sinks that cannot store a sample
/// drop it.
pub trait DiagnosticSink: Send + Sync {
    /// Record `value` of variable `name` at downflow `position`
    fn add_variable(&self, name: &str, position: Meters, value: f64);
}

/// One recorded value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticSample {
    /// Downflow distance where the value was computed
    pub position: Meters,
    /// Recorded value in the variable's own unit
    pub value: f64,
}

/// In-memory log of every sample, grouped by variable name in insertion order.
///
/// Appends go through a mutex, so one log may be shared between models (or, if a
/// caller insists, between threads) without interleaving samples of one variable.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    series: Mutex<FxHashMap<String, Vec<DiagnosticSample>>>,
}

impl DiagnosticLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    fn with_series<R>(&self, f: impl FnOnce(&mut FxHashMap<String, Vec<DiagnosticSample>>) -> R) -> R {
        // A panic while holding the lock can only have interrupted a push, which
        // leaves the map consistent.
        let mut guard = self.series.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    /// All samples recorded for `name`, oldest first
    pub fn series(&self, name: &str) -> Vec<DiagnosticSample> {
        self.with_series(|series| series.get(name).cloned().unwrap_or_default())
    }

    /// Most recent sample of `name`
    pub fn latest(&self, name: &str) -> Option<DiagnosticSample> {
        self.with_series(|series| series.get(name).and_then(|s| s.last().copied()))
    }

    /// Names of every recorded variable, sorted
    pub fn variable_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.with_series(|series| series.keys().cloned().collect());
        names.sort();
        names
    }

    /// Total number of samples across all variables
    pub fn len(&self) -> usize {
        self.with_series(|series| series.values().map(Vec::len).sum())
    }

    /// True if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every sample
    pub fn clear(&self) {
        self.with_series(|series| series.clear());
    }

    /// Copy of the log with variables in sorted order, suitable for serialization
    pub fn snapshot(&self) -> BTreeMap<String, Vec<DiagnosticSample>> {
        self.with_series(|series| {
            series
                .iter()
                .map(|(name, samples)| (name.clone(), samples.clone()))
                .collect()
        })
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn add_variable(&self, name: &str, position: Meters, value: f64) {
        trace!(variable = name, position = *position, value, "diagnostic sample");
        self.with_series(|series| {
            series
                .entry(name.to_owned())
                .or_default()
                .push(DiagnosticSample { position, value });
        });
    }
}

/// Forwards samples to `tracing` at TRACE level without storing them
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn add_variable(&self, name: &str, position: Meters, value: f64) {
        trace!(variable = name, position = *position, value, "diagnostic sample");
    }
}

/// Discards every sample
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn add_variable(&self, _name: &str, _position: Meters, _value: f64) {}
}
