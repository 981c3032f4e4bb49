//! Run Ledger - derived per-run table and track totals

use serde::Serialize;
use tracing::{debug, warn};

use super::energy::integrate_energy;
use super::RunRecord;
use crate::Result;

/// A run record together with its derived duration and energy.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DerivedRun {
    #[serde(flatten)]
    record: RunRecord,
    hours: f64,
    energy: f64,
}

impl DerivedRun {
    /// Derive hours and energy for a single run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Format`] if either clock time is malformed.
    pub fn derive(record: &RunRecord) -> Result<Self> {
        let hours = record.hours()?;
        if hours < 0.0 {
            warn!(
                date = record.date(),
                range = %record.time_range(),
                hours,
                "run ends before it starts; keeping negative duration"
            );
        }
        let energy = integrate_energy(hours, record.power_start(), record.power_end());
        Ok(Self {
            record: record.clone(),
            hours,
            energy,
        })
    }

    /// Get the source run record.
    #[must_use]
    pub const fn record(&self) -> &RunRecord {
        &self.record
    }

    /// Get the date label.
    #[must_use]
    pub fn date(&self) -> &str {
        self.record.date()
    }

    /// Time range label, e.g. `"11:00 - 16:00"`.
    #[must_use]
    pub fn time_range(&self) -> String {
        self.record.time_range()
    }

    /// Elapsed hours (two decimals).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.hours
    }

    /// Integrated energy in Wh (two decimals).
    #[must_use]
    pub const fn energy(&self) -> f64 {
        self.energy
    }
}

/// Ordered table of derived runs for one track, with totals.
///
/// Rows keep the order of the input log; nothing is sorted by date.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RunLedger {
    runs: Vec<DerivedRun>,
    total_hours: f64,
    total_energy: f64,
}

impl RunLedger {
    /// Build a ledger from a track's run log.
    ///
    /// An empty log produces an empty ledger with zero totals.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Format`] for the first record whose clock
    /// times cannot be parsed.
    pub fn from_runs(records: &[RunRecord]) -> Result<Self> {
        let runs = records
            .iter()
            .map(DerivedRun::derive)
            .collect::<Result<Vec<_>>>()?;

        let total_hours: f64 = runs.iter().map(DerivedRun::hours).sum();
        let total_energy: f64 = runs.iter().map(DerivedRun::energy).sum();

        debug!(runs = runs.len(), total_hours, total_energy, "run ledger built");

        Ok(Self {
            runs,
            total_hours,
            total_energy,
        })
    }

    /// Get the derived runs in log order.
    #[must_use]
    pub fn runs(&self) -> &[DerivedRun] {
        &self.runs
    }

    /// Number of runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Check if the ledger has no runs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Sum of per-run hours.
    #[must_use]
    pub const fn total_hours(&self) -> f64 {
        self.total_hours
    }

    /// Sum of per-run energy (Wh).
    #[must_use]
    pub const fn total_energy(&self) -> f64 {
        self.total_energy
    }

    /// Date label of the first logged run, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<&str> {
        self.runs.first().map(DerivedRun::date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_empty_ledger() {
        let ledger = RunLedger::from_runs(&[]).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.total_hours().abs() < f64::EPSILON);
        assert!(ledger.total_energy().abs() < f64::EPSILON);
        assert!(ledger.first_date().is_none());
    }

    #[test]
    fn test_ledger_preserves_log_order() {
        let records = vec![
            RunRecord::new("03/12/2025", "12:00", "20:00", 99.22, 66.99),
            RunRecord::new("01/12/2025", "11:00", "16:00", 94.88, 65.78),
        ];
        let ledger = RunLedger::from_runs(&records).unwrap();
        let dates: Vec<&str> = ledger.runs().iter().map(DerivedRun::date).collect();
        assert_eq!(dates, vec!["03/12/2025", "01/12/2025"]);
        assert_eq!(ledger.first_date(), Some("03/12/2025"));
    }

    #[test]
    fn test_ledger_totals() {
        let records = vec![
            RunRecord::new("01/12/2025", "11:00", "16:00", 94.88, 65.78),
            RunRecord::new("02/12/2025", "09:00", "17:00", 103.0, 67.4),
        ];
        let ledger = RunLedger::from_runs(&records).unwrap();
        assert!((ledger.total_hours() - 13.0).abs() < 1e-9);
        assert!((ledger.total_energy() - (401.65 + 681.6)).abs() < 1e-9);
    }

    #[test]
    fn test_ledger_fails_on_bad_time() {
        let records = vec![
            RunRecord::new("01/12/2025", "11:00", "16:00", 94.88, 65.78),
            RunRecord::new("02/12/2025", "9am", "17:00", 103.0, 67.4),
        ];
        let err = RunLedger::from_runs(&records).unwrap_err();
        assert!(matches!(err, Error::Format { ref date, .. } if date == "02/12/2025"));
    }

    #[test]
    fn test_quarter_hour_run_energy_rounding() {
        let records = vec![RunRecord::new("d", "10:00", "10:15", 60.0, 41.0)];
        let ledger = RunLedger::from_runs(&records).unwrap();
        assert_eq!(ledger.runs()[0].hours(), 0.25);
        assert_eq!(ledger.runs()[0].energy(), 12.62);
    }

    #[test]
    fn test_negative_duration_passes_through() {
        let records = vec![RunRecord::new("05/12/2025", "20:00", "18:00", 100.0, 60.0)];
        let ledger = RunLedger::from_runs(&records).unwrap();
        assert!((ledger.runs()[0].hours() + 2.0).abs() < 1e-9);
        assert!((ledger.runs()[0].energy() + 160.0).abs() < 1e-9);
    }
}
