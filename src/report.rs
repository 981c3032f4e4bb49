//! Experiment report pipeline
//!
//! Loads experiment data from an [`ExperimentSource`], runs both ledgers for
//! every track and assembles the records the presentation layer renders.
//! A track whose ledgers fail is reported as [`TrackStatus::Failed`]; the
//! remaining tracks still appear in the comparison and charts.

use serde::Serialize;
use tracing::{info, warn};

use crate::comparison::ComparisonTable;
use crate::electrode::ElectrodePanel;
use crate::runs::RunLedger;
use crate::series::{MassLossBars, TrackSeries};
use crate::source::{ExperimentData, ExperimentSource};
use crate::track::{Track, TrackSummary};
use crate::Result;

/// Shown as the experiment start when no run has been logged.
pub const NO_START_DATE: &str = "N/A";

/// Outcome of summarizing one track.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrackStatus {
    /// Both ledgers succeeded.
    Ready(TrackSummary),
    /// A ledger failed; the track is reported without figures.
    Failed {
        /// Human-readable cause
        reason: String,
    },
}

/// Per-track section of the report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackReport {
    id: String,
    label: String,
    status: TrackStatus,
}

impl TrackReport {
    fn new(track: &Track) -> Self {
        let status = match track.summarize() {
            Ok(summary) => TrackStatus::Ready(summary),
            Err(err) => {
                warn!(track = %track.id(), error = %err, "track excluded from comparison");
                TrackStatus::Failed {
                    reason: err.to_string(),
                }
            }
        };
        Self {
            id: track.id().to_string(),
            label: track.label().to_string(),
            status,
        }
    }

    /// Track ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Summarization outcome.
    #[must_use]
    pub const fn status(&self) -> &TrackStatus {
        &self.status
    }

    /// The summary, if the track succeeded.
    #[must_use]
    pub const fn summary(&self) -> Option<&TrackSummary> {
        match &self.status {
            TrackStatus::Ready(summary) => Some(summary),
            TrackStatus::Failed { .. } => None,
        }
    }
}

/// Headline figures for one track.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackOverview {
    /// Track ID
    pub id: String,
    /// Number of logged runs
    pub run_count: usize,
    /// Total hours, if the run ledger succeeded
    pub total_hours: Option<f64>,
}

/// Experiment overview.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Overview {
    /// Date of the first run of the first track, or [`NO_START_DATE`]
    pub experiment_start: String,
    /// Headline figures, in track order
    pub tracks: Vec<TrackOverview>,
}

/// Full experiment report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExperimentReport {
    overview: Overview,
    tracks: Vec<TrackReport>,
    comparison: ComparisonTable,
    series: Vec<TrackSeries>,
    mass_loss: Vec<MassLossBars>,
    electrodes: Vec<ElectrodePanel>,
    mass_history: bool,
}

impl ExperimentReport {
    /// Load data from `source` and build the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or the data fails
    /// validation. Per-track ledger failures do not fail the report.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use degradation_ledger::dataset;
    /// use degradation_ledger::report::ExperimentReport;
    ///
    /// let report = ExperimentReport::build(&dataset::hydrostar())?;
    /// assert_eq!(report.overview().experiment_start, "01/12/2025");
    /// assert_eq!(report.comparison().columns(), ["304 Steel", "316 Steel"]);
    /// # Ok::<(), degradation_ledger::Error>(())
    /// ```
    pub fn build(source: &impl ExperimentSource) -> Result<Self> {
        let data = source.load()?;
        data.validate()?;
        Ok(Self::from_data(&data))
    }

    /// Build the report from already-validated data.
    #[must_use]
    pub fn from_data(data: &ExperimentData) -> Self {
        let tracks: Vec<TrackReport> = data.tracks().iter().map(TrackReport::new).collect();

        let ready: Vec<TrackSummary> = tracks
            .iter()
            .filter_map(TrackReport::summary)
            .cloned()
            .collect();

        let overview = Overview {
            experiment_start: data
                .tracks()
                .first()
                .and_then(|t| t.runs().first())
                .map_or_else(|| NO_START_DATE.to_string(), |r| r.date().to_string()),
            tracks: data
                .tracks()
                .iter()
                .zip(&tracks)
                .map(|(track, report)| TrackOverview {
                    id: track.id().to_string(),
                    run_count: track.runs().len(),
                    total_hours: report.summary().map(|s| s.runs().total_hours()),
                })
                .collect(),
        };

        // Energy and mass series are independent: a track whose mass ledger
        // failed still plots its runs, and vice versa.
        let series = data
            .tracks()
            .iter()
            .zip(&tracks)
            .map(|(track, report)| {
                let rebuilt;
                let runs = match report.summary() {
                    Some(summary) => summary.runs().runs(),
                    None => {
                        rebuilt = RunLedger::from_runs(track.runs()).unwrap_or_default();
                        rebuilt.runs()
                    }
                };
                TrackSeries::new(track.id(), runs, track.masses())
            })
            .collect();

        let mass_loss = ready
            .iter()
            .map(|summary| MassLossBars::new(summary.id(), summary.mass()))
            .collect();

        let electrodes = data
            .electrodes()
            .iter()
            .map(|image| {
                let hours = ready
                    .iter()
                    .find(|s| s.id() == image.track())
                    .map(|s| s.runs().total_hours());
                image.panel(hours)
            })
            .collect();

        info!(
            tracks = tracks.len(),
            ready = ready.len(),
            "experiment report built"
        );

        Self {
            overview,
            comparison: ComparisonTable::from_tracks(&ready),
            tracks,
            series,
            mass_loss,
            electrodes,
            mass_history: data.tracks().first().is_some_and(|t| t.masses().len() > 1),
        }
    }

    /// Experiment overview.
    #[must_use]
    pub const fn overview(&self) -> &Overview {
        &self.overview
    }

    /// Per-track sections, in track order.
    #[must_use]
    pub fn tracks(&self) -> &[TrackReport] {
        &self.tracks
    }

    /// Comparison over the tracks that summarized successfully.
    #[must_use]
    pub const fn comparison(&self) -> &ComparisonTable {
        &self.comparison
    }

    /// Chart series of every track, in track order.
    #[must_use]
    pub fn series(&self) -> &[TrackSeries] {
        &self.series
    }

    /// Mass-loss bars of the successful tracks.
    #[must_use]
    pub fn mass_loss(&self) -> &[MassLossBars] {
        &self.mass_loss
    }

    /// Electrode image panels.
    #[must_use]
    pub fn electrodes(&self) -> &[ElectrodePanel] {
        &self.electrodes
    }

    /// Whether the mass-over-time chart is shown.
    ///
    /// Decided by the first track's history alone; the tracks are weighed on
    /// the same days.
    #[must_use]
    pub const fn has_mass_history(&self) -> bool {
        self.mass_history
    }
}
