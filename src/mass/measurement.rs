//! Mass Measurement - one weighing of a track's electrode pair

use serde::{Deserialize, Serialize};

/// Electrode of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Electrode {
    /// Cathode (black lead)
    Cathode,
    /// Anode (red lead)
    Anode,
}

impl Electrode {
    /// Both electrodes, cathode first.
    pub const ALL: [Self; 2] = [Self::Cathode, Self::Anode];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cathode => "Cathode",
            Self::Anode => "Anode",
        }
    }
}

/// Mass Measurement records both electrode masses (grams) on one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MassMeasurement {
    date: String,
    #[serde(rename = "cathode")]
    cathode_mass: f64,
    #[serde(rename = "anode")]
    anode_mass: f64,
}

impl MassMeasurement {
    /// Create a new mass measurement.
    #[must_use]
    pub fn new(date: impl Into<String>, cathode_mass: f64, anode_mass: f64) -> Self {
        Self {
            date: date.into(),
            cathode_mass,
            anode_mass,
        }
    }

    /// Get the date label.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Get the cathode mass in grams.
    #[must_use]
    pub const fn cathode_mass(&self) -> f64 {
        self.cathode_mass
    }

    /// Get the anode mass in grams.
    #[must_use]
    pub const fn anode_mass(&self) -> f64 {
        self.anode_mass
    }

    /// Get the mass of the given electrode.
    #[must_use]
    pub const fn mass(&self, electrode: Electrode) -> f64 {
        match electrode {
            Electrode::Cathode => self.cathode_mass,
            Electrode::Anode => self.anode_mass,
        }
    }
}
