//! # Degradation Ledger: Electrode Degradation Experiment Metrics
//!
//! Turns the operating logs of a two-track electrode degradation experiment
//! (304 versus 316 stainless steel, each with a cathode and an anode) into
//! the figures and series a dashboard renders.
//!
//! ## Pipeline
//!
//! ```text
//! ExperimentSource ──> Track ──┬──> RunLedger  (hours, energy) ──┐
//!                              └──> MassLossSummary ─────────────┤
//!                                                                ├──> ComparisonTable
//!                                                                └──> TrackSeries
//! ```
//!
//! - Run durations come from same-day `HH:MM` clock times; an end before the
//!   start stays negative rather than wrapping to the next day.
//! - Energy is the trapezoid `0.5 × hours × (P_start + P_end)`.
//! - Mass loss compares the first and last weighing by position.
//!
//! ## Example Usage
//!
//! ```rust
//! use degradation_ledger::dataset;
//! use degradation_ledger::report::ExperimentReport;
//!
//! let report = ExperimentReport::build(&dataset::hydrostar())?;
//!
//! for row in report.comparison().rows() {
//!     println!("{}: {:?}", row.label(), row.formatted());
//! }
//! # Ok::<(), degradation_ledger::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod comparison;
pub mod dataset;
pub mod electrode;
pub mod error;
pub mod format;
pub mod mass;
pub mod report;
pub mod runs;
pub mod series;
pub mod source;
pub mod track;

pub use error::{Error, Result};
