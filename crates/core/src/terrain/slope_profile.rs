//! Slope sampled along the flow path
//!
//! A profile is a table of `(downflow distance, slope)` stations, typically
//! extracted from a DEM along the steepest-descent line. Slope between stations
//! is linearly interpolated; before the first and after the last station the end
//! value is held.

use super::TerrainCondition;
use crate::core_types::units::{Meters, MetersPerSecondSquared, Radians};
use crate::error::{FlowError, FlowResult};
use serde::{Deserialize, Serialize};

/// Piecewise-linear slope with constant flow depth and gravity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeProfile {
    stations: Vec<(Meters, Radians)>,
    depth: Meters,
    gravity: MetersPerSecondSquared,
}

impl SlopeProfile {
    /// Build from stations sorted by strictly increasing distance.
    ///
    /// # Errors
    /// Configuration error if the table is empty, unsorted or contains
    /// non-finite values.
    pub fn new(stations: Vec<(Meters, Radians)>, depth: Meters) -> FlowResult<Self> {
        if stations.is_empty() {
            return Err(FlowError::configuration(
                "slope_profile",
                "needs at least one station",
            ));
        }
        for (i, (distance, slope)) in stations.iter().enumerate() {
            if !distance.is_finite() || !slope.is_finite() {
                return Err(FlowError::configuration(
                    format!("slope_profile[{i}]"),
                    "distance and slope must be finite",
                ));
            }
        }
        if let Some(i) = stations.windows(2).position(|w| w[1].0 <= w[0].0) {
            return Err(FlowError::configuration(
                format!("slope_profile[{}]", i + 1),
                "distances must be strictly increasing",
            ));
        }
        Ok(SlopeProfile {
            stations,
            depth,
            gravity: MetersPerSecondSquared::STANDARD_GRAVITY,
        })
    }

    /// Build from `(distance m, slope degrees)` pairs
    pub fn from_degrees(table: &[(f64, f64)], depth: Meters) -> FlowResult<Self> {
        let stations = table
            .iter()
            .map(|&(d, s)| (Meters::new(d), Radians::from_degrees(s)))
            .collect();
        Self::new(stations, depth)
    }

    /// Parse a two-column text table: distance (m) and slope (degrees) per line,
    /// separated by whitespace or a comma. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str, depth: Meters) -> FlowResult<Self> {
        let mut table = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut columns = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|c| !c.is_empty());
            let mut next_number = |what: &str| -> FlowResult<f64> {
                let raw = columns.next().ok_or_else(|| {
                    FlowError::configuration(
                        format!("slope_profile line {}", line_no + 1),
                        format!("missing {what} column"),
                    )
                })?;
                raw.parse::<f64>().map_err(|e| {
                    FlowError::configuration(
                        format!("slope_profile line {}", line_no + 1),
                        format!("{what} `{raw}`: {e}"),
                    )
                })
            };
            let distance = next_number("distance")?;
            let slope = next_number("slope")?;
            table.push((distance, slope));
        }
        Self::from_degrees(&table, depth)
    }

    /// Same profile under another gravity
    pub fn with_gravity(self, gravity: MetersPerSecondSquared) -> Self {
        SlopeProfile { gravity, ..self }
    }

    /// Distance of the last station
    pub fn length(&self) -> Meters {
        self.stations.last().map_or(Meters::new(0.0), |s| s.0)
    }

    /// Stations in downflow order
    pub fn stations(&self) -> &[(Meters, Radians)] {
        &self.stations
    }
}

impl TerrainCondition for SlopeProfile {
    fn gravity(&self, _position: Meters) -> MetersPerSecondSquared {
        self.gravity
    }

    fn channel_depth(&self, _position: Meters) -> Meters {
        self.depth
    }

    fn channel_slope(&self, position: Meters) -> Radians {
        // Index of the first station strictly downflow of `position`
        let upper = self.stations.partition_point(|(d, _)| *d <= position);
        match upper {
            0 => self.stations[0].1,
            n if n == self.stations.len() => self.stations[n - 1].1,
            n => {
                let (d0, s0) = self.stations[n - 1];
                let (d1, s1) = self.stations[n];
                let t = (*position - *d0) / (*d1 - *d0);
                Radians::new(*s0 + t * (*s1 - *s0))
            }
        }
    }
}
