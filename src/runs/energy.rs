//! Trapezoidal energy integration

use crate::format::round_to;

/// Energy consumed over a run whose power decays linearly from
/// `power_start` to `power_end`, rounded to two decimals.
///
/// `energy = 0.5 × hours × (power_start + power_end)`
///
/// ```rust
/// use degradation_ledger::runs::integrate_energy;
///
/// assert!((integrate_energy(5.0, 94.88, 65.78) - 401.65).abs() < 1e-9);
/// ```
#[must_use]
pub fn integrate_energy(hours: f64, power_start: f64, power_end: f64) -> f64 {
    round_to(0.5 * hours * (power_start + power_end), 2)
}
