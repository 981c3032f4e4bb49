//! Tracks - one steel variant under test

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mass::{MassLossSummary, MassMeasurement};
use crate::runs::{RunLedger, RunRecord};
use crate::Result;

/// A named pairing of a run log and a mass-measurement history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    id: String,
    label: String,
    #[serde(default)]
    runs: Vec<RunRecord>,
    #[serde(default)]
    masses: Vec<MassMeasurement>,
}

impl Track {
    /// Create a new track with empty logs.
    ///
    /// # Arguments
    ///
    /// * `id` - Short identifier, e.g. `"304"`
    /// * `label` - Display label, e.g. `"304 Stainless Steel"`
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            runs: Vec::new(),
            masses: Vec::new(),
        }
    }

    /// Set the run log.
    #[must_use]
    pub fn with_runs(mut self, runs: Vec<RunRecord>) -> Self {
        self.runs = runs;
        self
    }

    /// Set the mass-measurement history.
    #[must_use]
    pub fn with_masses(mut self, masses: Vec<MassMeasurement>) -> Self {
        self.masses = masses;
        self
    }

    /// Get the track ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the run log in logged order.
    #[must_use]
    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// Get the mass history in logged order.
    #[must_use]
    pub fn masses(&self) -> &[MassMeasurement] {
        &self.masses
    }

    /// Run both ledgers for this track.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Format`] for a malformed run time, or
    /// [`crate::Error::InsufficientData`] when the mass history is empty.
    pub fn summarize(&self) -> Result<TrackSummary> {
        debug!(track = %self.id, "summarizing track");
        let runs = RunLedger::from_runs(&self.runs)?;
        let mass = MassLossSummary::from_measurements(&self.id, &self.masses)?;
        Ok(TrackSummary {
            id: self.id.clone(),
            label: self.label.clone(),
            runs,
            mass,
        })
    }
}

/// Ledger results for one track.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackSummary {
    id: String,
    label: String,
    runs: RunLedger,
    mass: MassLossSummary,
}

impl TrackSummary {
    /// Get the track ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the run ledger.
    #[must_use]
    pub const fn runs(&self) -> &RunLedger {
        &self.runs
    }

    /// Get the mass-loss summary.
    #[must_use]
    pub const fn mass(&self) -> &MassLossSummary {
        &self.mass
    }
}
