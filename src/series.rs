//! Chart series per track
//!
//! Series are indexed by ordinal position within their own track and carry
//! the source row's date label. Tracks are never aligned on dates, so two
//! tracks with different logs simply plot against their own labels.

use serde::Serialize;

use crate::format::serialize_hundredths;
use crate::mass::{Electrode, MassLossSummary, MassMeasurement};
use crate::runs::{DerivedRun, RunRecord};

/// One point of a chart series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint {
    /// Position in the source sequence
    pub ordinal: usize,
    /// Date label of the source row
    pub label: String,
    /// Plotted value
    pub value: f64,
}

/// Running sum of per-run energy, in log order.
///
/// ```rust
/// use degradation_ledger::runs::{RunLedger, RunRecord};
/// use degradation_ledger::series::cumulative_energy;
///
/// let ledger = RunLedger::from_runs(&[
///     RunRecord::new("01/12/2025", "10:00", "11:00", 10.0, 10.0),
///     RunRecord::new("02/12/2025", "10:00", "12:00", 10.0, 10.0),
/// ])?;
/// assert_eq!(cumulative_energy(ledger.runs()), vec![10.0, 30.0]);
/// # Ok::<(), degradation_ledger::Error>(())
/// ```
#[must_use]
pub fn cumulative_energy(runs: &[DerivedRun]) -> Vec<f64> {
    runs.iter()
        .scan(0.0, |total, run| {
            *total += run.energy();
            Some(*total)
        })
        .collect()
}

fn points<T>(rows: &[T], label: impl Fn(&T) -> &str, value: impl Fn(&T) -> f64) -> Vec<SeriesPoint> {
    rows.iter()
        .enumerate()
        .map(|(ordinal, row)| SeriesPoint {
            ordinal,
            label: label(row).to_string(),
            value: value(row),
        })
        .collect()
}

/// All chart series for one track.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackSeries {
    track: String,
    cumulative_energy: Vec<SeriesPoint>,
    power_start: Vec<SeriesPoint>,
    power_end: Vec<SeriesPoint>,
    cathode_mass: Vec<SeriesPoint>,
    anode_mass: Vec<SeriesPoint>,
}

impl TrackSeries {
    /// Build series from a track's derived runs and raw mass history.
    #[must_use]
    pub fn new(track: impl Into<String>, runs: &[DerivedRun], masses: &[MassMeasurement]) -> Self {
        let energy = runs
            .iter()
            .zip(cumulative_energy(runs))
            .enumerate()
            .map(|(ordinal, (run, value))| SeriesPoint {
                ordinal,
                label: run.date().to_string(),
                value,
            })
            .collect();

        let records: Vec<&RunRecord> = runs.iter().map(DerivedRun::record).collect();

        Self {
            track: track.into(),
            cumulative_energy: energy,
            power_start: points(&records, |r| r.date(), |r| r.power_start()),
            power_end: points(&records, |r| r.date(), |r| r.power_end()),
            cathode_mass: points(masses, MassMeasurement::date, |m| m.mass(Electrode::Cathode)),
            anode_mass: points(masses, MassMeasurement::date, |m| m.mass(Electrode::Anode)),
        }
    }

    /// Track ID.
    #[must_use]
    pub fn track(&self) -> &str {
        &self.track
    }

    /// Cumulative energy (Wh) by run.
    #[must_use]
    pub fn cumulative_energy(&self) -> &[SeriesPoint] {
        &self.cumulative_energy
    }

    /// Power reading at run start (W).
    #[must_use]
    pub fn power_start(&self) -> &[SeriesPoint] {
        &self.power_start
    }

    /// Power reading at run end (W).
    #[must_use]
    pub fn power_end(&self) -> &[SeriesPoint] {
        &self.power_end
    }

    /// Raw mass history (g) of one electrode.
    #[must_use]
    pub fn mass(&self, electrode: Electrode) -> &[SeriesPoint] {
        match electrode {
            Electrode::Cathode => &self.cathode_mass,
            Electrode::Anode => &self.anode_mass,
        }
    }
}

/// One bar of a mass-loss chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MassLossBar {
    /// Category label (`Cathode`, `Anode` or `Total`)
    pub category: &'static str,
    /// Loss in grams, serialized at two decimals
    #[serde(serialize_with = "serialize_hundredths")]
    pub loss: f64,
}

/// Grouped mass-loss bars for one track: cathode, anode, total.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MassLossBars {
    track: String,
    bars: Vec<MassLossBar>,
}

impl MassLossBars {
    /// Bar categories in plot order.
    pub const CATEGORIES: [&'static str; 3] = ["Cathode", "Anode", "Total"];

    /// Build the bars from a mass-loss summary.
    #[must_use]
    pub fn new(track: impl Into<String>, summary: &MassLossSummary) -> Self {
        let losses = [
            summary.loss_cathode(),
            summary.loss_anode(),
            summary.loss_total(),
        ];
        Self {
            track: track.into(),
            bars: Self::CATEGORIES
                .into_iter()
                .zip(losses)
                .map(|(category, loss)| MassLossBar { category, loss })
                .collect(),
        }
    }

    /// Track ID.
    #[must_use]
    pub fn track(&self) -> &str {
        &self.track
    }

    /// Bars in category order.
    #[must_use]
    pub fn bars(&self) -> &[MassLossBar] {
        &self.bars
    }
}
