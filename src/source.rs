//! Experiment data and the sources that provide it
//!
//! The report pipeline never reads ambient state. Callers inject an
//! [`ExperimentSource`]: in-memory data, a JSON file, or the built-in
//! reference dataset.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::electrode::ElectrodeImage;
use crate::track::Track;
use crate::{Error, Result};

/// Complete input of one experiment report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExperimentData {
    tracks: Vec<Track>,
    #[serde(default)]
    electrodes: Vec<ElectrodeImage>,
}

impl ExperimentData {
    /// Create experiment data from tracks, in display order.
    #[must_use]
    pub const fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            electrodes: Vec::new(),
        }
    }

    /// Set the electrode image configuration.
    #[must_use]
    pub fn with_electrodes(mut self, electrodes: Vec<ElectrodeImage>) -> Self {
        self.electrodes = electrodes;
        self
    }

    /// Tracks in display order.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Electrode images in display order.
    #[must_use]
    pub fn electrodes(&self) -> &[ElectrodeImage] {
        &self.electrodes
    }

    /// Look up a track by ID.
    #[must_use]
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    /// Parse experiment data from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the document does not match the schema.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check structural consistency.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if track IDs repeat or an electrode
    /// image references an unknown track.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for track in &self.tracks {
            if !seen.insert(track.id()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate track id '{}'",
                    track.id()
                )));
            }
        }
        if let Some(image) = self.electrodes.iter().find(|e| !seen.contains(e.track())) {
            return Err(Error::InvalidConfig(format!(
                "electrode image '{}' references unknown track '{}'",
                image.key(),
                image.track()
            )));
        }
        Ok(())
    }
}

/// Provider of experiment data.
pub trait ExperimentSource {
    /// Load the experiment data.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read or decoded.
    fn load(&self) -> Result<ExperimentData>;
}

impl ExperimentSource for ExperimentData {
    fn load(&self) -> Result<ExperimentData> {
        Ok(self.clone())
    }
}

/// Loads experiment data from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading the given path.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExperimentSource for JsonFileSource {
    fn load(&self) -> Result<ExperimentData> {
        debug!(path = %self.path.display(), "loading experiment data");
        let json = std::fs::read_to_string(&self.path)?;
        ExperimentData::from_json(&json)
    }
}
