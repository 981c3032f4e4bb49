//! Report pipeline tests (data sources, per-track failure isolation, output)

use degradation_ledger::mass::Electrode;
use degradation_ledger::report::{ExperimentReport, TrackStatus};
use degradation_ledger::source::{ExperimentData, ExperimentSource, JsonFileSource};
use degradation_ledger::track::Track;
use degradation_ledger::{dataset, Error};

fn fixture() -> JsonFileSource {
    JsonFileSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/experiment.json"))
}

#[test]
fn test_json_source_loads_fixture() {
    let data = fixture().load().unwrap();
    assert_eq!(data.tracks().len(), 2);
    assert_eq!(data.track("304").unwrap().runs().len(), 2);
    assert_eq!(data.electrodes().len(), 2);
}

#[test]
fn test_fixture_report_isolates_bad_track() {
    let report = ExperimentReport::build(&fixture()).unwrap();

    let ready = report.tracks()[0].summary().unwrap();
    assert!((ready.runs().total_energy() - 1083.25).abs() < 1e-9);

    match report.tracks()[1].status() {
        TrackStatus::Failed { reason } => {
            assert!(reason.contains("5pm"));
            assert!(reason.contains("02/12/2025"));
        }
        TrackStatus::Ready(_) => panic!("316 track has a malformed run time"),
    }

    assert_eq!(report.comparison().columns(), ["304 Steel"]);
    assert_eq!(report.series().len(), 2);
    assert_eq!(report.series()[1].mass(Electrode::Cathode).len(), 1);
    assert!(report.series()[1].cumulative_energy().is_empty());

    let panels = report.electrodes();
    assert_eq!(
        panels[0].after_caption.as_deref(),
        Some("After 13.0 hours of operation")
    );
    assert!(panels[1].after_caption.is_none());
}

#[test]
fn test_reference_report_series() {
    let report = ExperimentReport::build(&dataset::hydrostar()).unwrap();
    let series = &report.series()[1];
    assert_eq!(series.track(), "316");

    let energy = series.cumulative_energy();
    assert_eq!(energy.len(), 9);
    assert!((energy[8].value - 5557.53).abs() < 1e-6);
    assert_eq!(energy[8].label, "12/12/2025");

    let anode = series.mass(Electrode::Anode);
    let values: Vec<f64> = anode.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![224.0, 223.0, 222.0, 221.64]);
}

#[test]
fn test_reference_electrode_captions() {
    let report = ExperimentReport::build(&dataset::hydrostar()).unwrap();
    for panel in report.electrodes() {
        assert_eq!(
            panel.after_caption.as_deref(),
            Some("After 62.7 hours of operation")
        );
    }
}

#[test]
fn test_invalid_data_fails_report() {
    let data = ExperimentData::new(vec![Track::new("304", "a"), Track::new("304", "b")]);
    assert!(matches!(
        ExperimentReport::build(&data),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_report_serializes_track_status() {
    let report = ExperimentReport::build(&fixture()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["tracks"][0]["status"]["status"], "ready");
    assert_eq!(json["tracks"][1]["status"]["status"], "failed");
    assert_eq!(json["overview"]["experiment_start"], "01/12/2025");
    assert_eq!(json["tracks"][0]["status"]["runs"]["runs"][0]["start"], "11:00");
    assert_eq!(json["tracks"][0]["status"]["mass"]["loss_cathode"], 1.8);
    assert_eq!(json["tracks"][0]["status"]["mass"]["loss_total"], 1.61);
    assert_eq!(json["mass_loss"][0]["bars"][1]["loss"], -0.19);
}

#[test]
fn test_report_is_idempotent() {
    let data = dataset::hydrostar();
    assert_eq!(ExperimentReport::from_data(&data), ExperimentReport::from_data(&data));
}
