//! Ledger tests against the reference 304/316 dataset

use degradation_ledger::comparison::{ComparisonMetric, ComparisonTable};
use degradation_ledger::dataset;
use degradation_ledger::mass::{Electrode, MassLossSummary, MassMeasurement};
use degradation_ledger::runs::{RunLedger, RunRecord};
use degradation_ledger::track::TrackSummary;
use degradation_ledger::Error;

fn summaries() -> Vec<TrackSummary> {
    dataset::hydrostar()
        .tracks()
        .iter()
        .map(|t| t.summarize().expect("reference track summarizes"))
        .collect()
}

// =============================================================================
// RunLedger
// =============================================================================

#[test]
fn test_first_run_energy() {
    let ledger = RunLedger::from_runs(&[RunRecord::new(
        "01/12/2025",
        "11:00",
        "16:00",
        94.88,
        65.78,
    )])
    .unwrap();
    let run = &ledger.runs()[0];
    assert!((run.hours() - 5.0).abs() < 1e-9);
    assert!((run.energy() - 401.65).abs() < 1e-9);
    assert_eq!(run.time_range(), "11:00 - 16:00");
}

#[test]
fn test_reference_totals() {
    let tracks = summaries();
    let hours: Vec<f64> = tracks.iter().map(|t| t.runs().total_hours()).collect();
    let energy: Vec<f64> = tracks.iter().map(|t| t.runs().total_energy()).collect();

    assert!((hours[0] - 62.68).abs() < 1e-6);
    assert!((hours[1] - 62.68).abs() < 1e-6);
    assert!((energy[0] - 5508.30).abs() < 1e-6);
    assert!((energy[1] - 5557.53).abs() < 1e-6);
}

#[test]
fn test_reference_run_table() {
    let tracks = summaries();
    let runs = tracks[0].runs().runs();
    assert_eq!(runs.len(), 9);

    let hours: Vec<f64> = runs.iter().map(|r| r.hours()).collect();
    let expected = [5.0, 8.0, 8.0, 7.28, 2.98, 7.67, 8.32, 6.58, 8.85];
    for (got, want) in hours.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{got} != {want}");
    }
    assert!((runs[8].energy() - 781.41).abs() < 1e-9);
}

#[test]
fn test_empty_run_log() {
    let ledger = RunLedger::from_runs(&[]).unwrap();
    assert!(ledger.runs().is_empty());
    assert_eq!(ledger.total_hours(), 0.0);
    assert_eq!(ledger.total_energy(), 0.0);
}

#[test]
fn test_malformed_time_reports_date() {
    let err = RunLedger::from_runs(&[RunRecord::new("08/12/2025", "17.31", "20:30", 113.9, 68.19)])
        .unwrap_err();
    assert!(err.to_string().contains("08/12/2025"));
    assert!(err.to_string().contains("17.31"));
}

// =============================================================================
// MassLossSummary
// =============================================================================

#[test]
fn test_reference_mass_losses() {
    let tracks = summaries();
    let m304 = tracks[0].mass();
    assert!((m304.loss_cathode() - 1.80).abs() < 1e-9);
    assert!((m304.loss_anode() - -0.19).abs() < 1e-9);
    assert!((m304.loss_total() - 1.61).abs() < 1e-9);
    assert_eq!(m304.current_date(), "07/01/2026");

    let m316 = tracks[1].mass();
    assert!((m316.loss_cathode() - -0.32).abs() < 1e-9);
    assert!((m316.loss_anode() - 2.36).abs() < 1e-9);
    assert_eq!(m316.change(Electrode::Anode).to_string(), "-2.36g (was 224g)");
}

#[test]
fn test_single_weighing() {
    let summary =
        MassLossSummary::from_measurements("304", &[MassMeasurement::new("01/12/2025", 182.0, 183.0)])
            .unwrap();
    assert_eq!(summary.loss_cathode(), 0.0);
    assert_eq!(summary.loss_anode(), 0.0);
    assert_eq!(summary.loss_total(), 0.0);
    assert_eq!(summary.current_date(), summary.initial_date());
}

#[test]
fn test_empty_mass_history() {
    let result = MassLossSummary::from_measurements("304", &[]);
    assert!(matches!(result, Err(Error::InsufficientData { .. })));
}

// =============================================================================
// ComparisonTable
// =============================================================================

#[test]
fn test_reference_comparison() {
    let table = ComparisonTable::from_tracks(&summaries());
    assert_eq!(table.columns(), ["304 Steel", "316 Steel"]);

    let formatted = |metric| table.row(metric).unwrap().formatted();
    assert_eq!(formatted(ComparisonMetric::TotalHours), ["62.7", "62.7"]);
    assert_eq!(formatted(ComparisonMetric::TotalEnergy), ["5508.3", "5557.5"]);
    assert_eq!(formatted(ComparisonMetric::CathodeLoss), ["1.80", "-0.32"]);
    assert_eq!(formatted(ComparisonMetric::AnodeLoss), ["-0.19", "2.36"]);
    assert_eq!(formatted(ComparisonMetric::TotalLoss), ["1.61", "2.04"]);
}
