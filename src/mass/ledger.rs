//! Mass Ledger - baseline versus current mass for one track

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::{Electrode, MassMeasurement};
use crate::format::{round_to, serialize_hundredths};
use crate::{Error, Result};

/// Signed change of one electrode's mass since the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MassChange {
    /// Current mass equals the baseline at two-decimal resolution.
    Unchanged,
    /// Mass moved away from the baseline.
    Changed {
        /// `current − baseline`, two decimals (negative = mass lost)
        change: f64,
        /// Baseline mass in grams
        baseline: f64,
    },
}

impl MassChange {
    fn between(baseline: f64, current: f64) -> Self {
        let change = round_to(current - baseline, 2);
        if change.abs() < f64::EPSILON {
            Self::Unchanged
        } else {
            Self::Changed { change, baseline }
        }
    }
}

impl fmt::Display for MassChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "No change"),
            Self::Changed { change, baseline } => write!(f, "{change:+.2}g (was {baseline}g)"),
        }
    }
}

/// Mass loss of a track, from its first (baseline) and last (current)
/// measurement.
///
/// Losses are `baseline − current`: positive means mass was lost, negative
/// means mass was gained. Losses keep full precision in memory and are
/// serialized at two decimals.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MassLossSummary {
    initial_cathode: f64,
    initial_anode: f64,
    current_cathode: f64,
    current_anode: f64,
    #[serde(serialize_with = "serialize_hundredths")]
    loss_cathode: f64,
    #[serde(serialize_with = "serialize_hundredths")]
    loss_anode: f64,
    #[serde(serialize_with = "serialize_hundredths")]
    loss_total: f64,
    initial_date: String,
    current_date: String,
    measurement_count: usize,
}

impl MassLossSummary {
    /// Derive the mass-loss summary from a track's measurement history.
    ///
    /// The history is used in the given order. A single measurement is both
    /// baseline and current, giving zero losses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] if `history` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use degradation_ledger::mass::{MassLossSummary, MassMeasurement};
    ///
    /// let history = vec![
    ///     MassMeasurement::new("01/12/2025", 182.0, 183.0),
    ///     MassMeasurement::new("07/01/2026", 180.20, 183.19),
    /// ];
    /// let summary = MassLossSummary::from_measurements("304", &history)?;
    /// assert!((summary.loss_total() - 1.61).abs() < 1e-9);
    /// # Ok::<(), degradation_ledger::Error>(())
    /// ```
    pub fn from_measurements(track: &str, history: &[MassMeasurement]) -> Result<Self> {
        let (Some(initial), Some(current)) = (history.first(), history.last()) else {
            return Err(Error::InsufficientData {
                track: track.to_string(),
            });
        };

        let loss_cathode = initial.cathode_mass() - current.cathode_mass();
        let loss_anode = initial.anode_mass() - current.anode_mass();

        debug!(
            track,
            measurements = history.len(),
            loss_cathode,
            loss_anode,
            "mass ledger built"
        );

        Ok(Self {
            initial_cathode: initial.cathode_mass(),
            initial_anode: initial.anode_mass(),
            current_cathode: current.cathode_mass(),
            current_anode: current.anode_mass(),
            loss_cathode,
            loss_anode,
            loss_total: loss_cathode + loss_anode,
            initial_date: initial.date().to_string(),
            current_date: current.date().to_string(),
            measurement_count: history.len(),
        })
    }

    /// Baseline cathode mass (g).
    #[must_use]
    pub const fn initial_cathode(&self) -> f64 {
        self.initial_cathode
    }

    /// Baseline anode mass (g).
    #[must_use]
    pub const fn initial_anode(&self) -> f64 {
        self.initial_anode
    }

    /// Current cathode mass (g).
    #[must_use]
    pub const fn current_cathode(&self) -> f64 {
        self.current_cathode
    }

    /// Current anode mass (g).
    #[must_use]
    pub const fn current_anode(&self) -> f64 {
        self.current_anode
    }

    /// Cathode loss (g).
    #[must_use]
    pub const fn loss_cathode(&self) -> f64 {
        self.loss_cathode
    }

    /// Anode loss (g).
    #[must_use]
    pub const fn loss_anode(&self) -> f64 {
        self.loss_anode
    }

    /// Combined loss of both electrodes (g).
    #[must_use]
    pub const fn loss_total(&self) -> f64 {
        self.loss_total
    }

    /// Loss of the given electrode (g).
    #[must_use]
    pub const fn loss(&self, electrode: Electrode) -> f64 {
        match electrode {
            Electrode::Cathode => self.loss_cathode,
            Electrode::Anode => self.loss_anode,
        }
    }

    /// Date label of the baseline measurement.
    #[must_use]
    pub fn initial_date(&self) -> &str {
        &self.initial_date
    }

    /// Date label of the current measurement.
    #[must_use]
    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    /// Whether more than one measurement exists.
    #[must_use]
    pub const fn has_history(&self) -> bool {
        self.measurement_count > 1
    }

    /// Change of the given electrode's mass since the baseline.
    #[must_use]
    pub fn change(&self, electrode: Electrode) -> MassChange {
        match electrode {
            Electrode::Cathode => MassChange::between(self.initial_cathode, self.current_cathode),
            Electrode::Anode => MassChange::between(self.initial_anode, self.current_anode),
        }
    }
}
