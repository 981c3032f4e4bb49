//! Run log processing
//!
//! Each run is one timed session on a track's electrodes, logged as a pair of
//! wall-clock times and the power drawn at the start and end of the session.
//!
//! ```text
//! RunRecord ──> elapsed_hours ──> integrate_energy ──> DerivedRun
//!                                                          │
//!                                               RunLedger (N, totals)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use degradation_ledger::runs::{RunLedger, RunRecord};
//!
//! let runs = vec![RunRecord::new("01/12/2025", "11:00", "16:00", 94.88, 65.78)];
//! let ledger = RunLedger::from_runs(&runs)?;
//!
//! assert!((ledger.total_hours() - 5.0).abs() < 1e-9);
//! assert!((ledger.total_energy() - 401.65).abs() < 1e-9);
//! # Ok::<(), degradation_ledger::Error>(())
//! ```

mod duration;
mod energy;
mod ledger;
mod run_record;

pub use duration::{elapsed_hours, parse_clock, CLOCK_FORMAT};
pub use energy::integrate_energy;
pub use ledger::{DerivedRun, RunLedger};
pub use run_record::RunRecord;
