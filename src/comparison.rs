//! Cross-track comparison table
//!
//! Joins every track's totals and mass losses into one row per metric. Rows
//! hold raw values; [`ComparisonRow::formatted`] applies the metric's fixed
//! precision when the table is rendered.

use serde::Serialize;

use crate::format::Precision;
use crate::track::TrackSummary;

/// A metric shown in the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonMetric {
    /// Sum of run hours
    TotalHours,
    /// Sum of run energy (Wh)
    TotalEnergy,
    /// Cathode mass loss (g)
    CathodeLoss,
    /// Anode mass loss (g)
    AnodeLoss,
    /// Combined mass loss (g)
    TotalLoss,
}

impl ComparisonMetric {
    /// All metrics in table order.
    pub const ALL: [Self; 5] = [
        Self::TotalHours,
        Self::TotalEnergy,
        Self::CathodeLoss,
        Self::AnodeLoss,
        Self::TotalLoss,
    ];

    /// Row label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalHours => "Total hours",
            Self::TotalEnergy => "Total energy (Wh)",
            Self::CathodeLoss => "Cathode mass loss (g)",
            Self::AnodeLoss => "Anode mass loss (g)",
            Self::TotalLoss => "Total mass loss (g)",
        }
    }

    /// Display precision.
    #[must_use]
    pub const fn precision(self) -> Precision {
        match self {
            Self::TotalHours | Self::TotalEnergy => Precision::Tenths,
            Self::CathodeLoss | Self::AnodeLoss | Self::TotalLoss => Precision::Hundredths,
        }
    }

    /// Read this metric from a track summary.
    #[must_use]
    pub fn value(self, track: &TrackSummary) -> f64 {
        match self {
            Self::TotalHours => track.runs().total_hours(),
            Self::TotalEnergy => track.runs().total_energy(),
            Self::CathodeLoss => track.mass().loss_cathode(),
            Self::AnodeLoss => track.mass().loss_anode(),
            Self::TotalLoss => track.mass().loss_total(),
        }
    }
}

/// One metric across all tracks, in table column order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonRow {
    metric: ComparisonMetric,
    values: Vec<f64>,
}

impl ComparisonRow {
    /// Get the metric.
    #[must_use]
    pub const fn metric(&self) -> ComparisonMetric {
        self.metric
    }

    /// Row label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.metric.label()
    }

    /// Raw values, one per track column.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Values rendered at the metric's precision.
    #[must_use]
    pub fn formatted(&self) -> Vec<String> {
        let precision = self.metric.precision();
        self.values.iter().map(|v| precision.format(*v)).collect()
    }
}

/// Side-by-side comparison of tracks.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ComparisonTable {
    columns: Vec<String>,
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Build the table with one column per track, in the given order.
    ///
    /// ```rust
    /// use degradation_ledger::comparison::ComparisonTable;
    /// use degradation_ledger::dataset;
    ///
    /// let tracks = dataset::hydrostar()
    ///     .tracks()
    ///     .iter()
    ///     .map(|t| t.summarize())
    ///     .collect::<Result<Vec<_>, _>>()?;
    /// let table = ComparisonTable::from_tracks(&tracks);
    /// assert_eq!(table.columns(), ["304 Steel", "316 Steel"]);
    /// assert_eq!(table.rows()[4].formatted(), ["1.61", "2.04"]);
    /// # Ok::<(), degradation_ledger::Error>(())
    /// ```
    #[must_use]
    pub fn from_tracks(tracks: &[TrackSummary]) -> Self {
        let columns = tracks.iter().map(|t| format!("{} Steel", t.id())).collect();
        let rows = ComparisonMetric::ALL
            .iter()
            .map(|&metric| ComparisonRow {
                metric,
                values: tracks.iter().map(|t| metric.value(t)).collect(),
            })
            .collect();
        Self { columns, rows }
    }

    /// Column headers, one per track.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in metric order.
    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Look up a row by metric.
    #[must_use]
    pub fn row(&self, metric: ComparisonMetric) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.metric == metric)
    }
}
