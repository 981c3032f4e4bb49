//! Reference dataset: 304 versus 316 stainless steel
//!
//! Run logs and weighings from the first five weeks of the experiment
//! (14 A constant current, 10 V cap). Useful as a fixture and as a template
//! for new JSON data files.

use crate::electrode::ElectrodeImage;
use crate::mass::{Electrode, MassMeasurement};
use crate::runs::RunRecord;
use crate::source::ExperimentData;
use crate::track::Track;

const NEW_ELECTRODE_IMAGE: &str = "304_316_new.webp";

fn runs(rows: &[(&str, &str, &str, f64, f64)]) -> Vec<RunRecord> {
    rows.iter()
        .map(|&(date, start, end, p0, p1)| RunRecord::new(date, start, end, p0, p1))
        .collect()
}

fn masses(rows: &[(&str, f64, f64)]) -> Vec<MassMeasurement> {
    rows.iter()
        .map(|&(date, cathode, anode)| MassMeasurement::new(date, cathode, anode))
        .collect()
}

fn electrode_images(track: &str) -> Vec<ElectrodeImage> {
    Electrode::ALL
        .iter()
        .map(|&electrode| {
            let (suffix, colour, lead) = match electrode {
                Electrode::Cathode => ("cathode", "black", "Black"),
                Electrode::Anode => ("anode", "red", "Red"),
            };
            ElectrodeImage::new(
                format!("{track}_{suffix}"),
                format!("{track} Steel - {} ({lead})", electrode.name()),
                NEW_ELECTRODE_IMAGE,
                format!("{track}_{colour}.webp"),
                track,
                electrode,
            )
        })
        .collect()
}

/// The 304/316 reference experiment.
#[must_use]
pub fn hydrostar() -> ExperimentData {
    let steel_304 = Track::new("304", "304 Stainless Steel")
        .with_runs(runs(&[
            ("01/12/2025", "11:00", "16:00", 94.88, 65.78),
            ("02/12/2025", "09:00", "17:00", 103.00, 67.40),
            ("03/12/2025", "12:00", "20:00", 99.22, 66.99),
            ("04/12/2025", "14:18", "21:35", 109.00, 68.24),
            ("08/12/2025", "17:31", "20:30", 113.90, 68.19),
            ("09/12/2025", "09:21", "17:01", 110.60, 69.77),
            ("10/12/2025", "09:49", "18:08", 114.70, 70.98),
            ("11/12/2025", "10:27", "17:02", 113.00, 68.82),
            ("12/12/2025", "11:49", "20:40", 109.80, 66.79),
        ]))
        .with_masses(masses(&[
            ("01/12/2025", 182.0, 183.0),
            ("09/12/2025", 181.0, 183.0),
            ("17/12/2025", 181.0, 183.0),
            ("07/01/2026", 180.20, 183.19),
        ]));

    let steel_316 = Track::new("316", "316 Stainless Steel")
        .with_runs(runs(&[
            ("01/12/2025", "11:00", "16:00", 99.30, 65.12),
            ("02/12/2025", "09:00", "17:00", 100.50, 66.60),
            ("03/12/2025", "12:00", "20:00", 98.99, 67.69),
            ("04/12/2025", "14:18", "21:35", 108.10, 71.18),
            ("08/12/2025", "17:31", "20:30", 116.50, 70.72),
            ("09/12/2025", "09:21", "17:01", 111.60, 71.18),
            ("10/12/2025", "09:49", "18:08", 113.80, 73.28),
            ("11/12/2025", "10:27", "17:02", 114.00, 72.35),
            ("12/12/2025", "11:49", "20:40", 108.40, 69.57),
        ]))
        .with_masses(masses(&[
            ("01/12/2025", 225.0, 224.0),
            ("09/12/2025", 224.0, 223.0),
            ("17/12/2025", 225.0, 222.0),
            ("07/01/2026", 225.32, 221.64),
        ]));

    let mut electrodes = electrode_images("304");
    electrodes.extend(electrode_images("316"));

    ExperimentData::new(vec![steel_304, steel_316]).with_electrodes(electrodes)
}
