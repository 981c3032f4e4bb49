//! Mass measurement history and mass-loss derivation
//!
//! Electrodes are weighed periodically. The first measurement in a track's
//! history is the baseline and the last is the current reading, by position
//! in the log.

mod ledger;
mod measurement;

pub use ledger::{MassChange, MassLossSummary};
pub use measurement::{Electrode, MassMeasurement};
