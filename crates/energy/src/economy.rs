//! Miles-per-gallon-equivalent summary statistic.

use simcore::TraceError;
use simcore::error::check_length;

/// m to miles.
const MILES_PER_METER: f64 = 0.000621371;
/// Gasoline energy baseline: kWh per gallon equivalent.
const KWH_PER_GALLON: f64 = 33.7;

fn nan_to_zero(x: &f64) -> f64 {
    if x.is_nan() { 0.0 } else { *x }
}

/// Miles-per-gallon-equivalent over a completed run.
///
/// Aggregates the time, total-distance and battery-power traces into a single
/// scalar; NaN samples are sanitized to zero before aggregation. Zero net
/// energy over a nonzero distance yields `+inf` (IEEE division, kept rather
/// than guarded so a lossless run reads as unbounded economy).
pub fn mpge(time: &[f64], total_distance: &[f64], battery_power: &[f64]) -> Result<f64, TraceError> {
    check_length(time.len(), total_distance.len())?;
    check_length(time.len(), battery_power.len())?;
    if time.is_empty() {
        return Err(TraceError::Empty);
    }

    let t_end = time.iter().map(nan_to_zero).fold(0.0_f64, f64::max);
    let distance_m = total_distance.iter().map(nan_to_zero).fold(0.0_f64, f64::max);
    let power_sum: f64 = battery_power.iter().map(nan_to_zero).sum();

    let miles = distance_m * MILES_PER_METER;
    let gallons_equivalent = (t_end / 3600.0) * 0.001 * power_sum / KWH_PER_GALLON;

    Ok(miles / gallons_equivalent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn known_run_matches_closed_form() {
        // Half an hour at a steady kilowatt over roughly a mile.
        let time = vec![0.0, 1800.0];
        let distance = vec![0.0, 1609.34];
        let power = vec![1000.0, 1000.0];

        let value = mpge(&time, &distance, &power).unwrap();
        let expected = (1609.34 * MILES_PER_METER) / ((1800.0 / 3600.0) * 0.001 * 2000.0 / 33.7);
        assert_relative_eq!(value, expected, epsilon = 1e-9);
    }

    #[test]
    fn zero_energy_over_distance_is_infinite() {
        let value = mpge(&[0.0, 10.0], &[0.0, 100.0], &[0.0, 0.0]).unwrap();
        assert!(value.is_infinite() && value > 0.0);
    }

    #[test]
    fn nan_samples_are_sanitized_to_zero() {
        let with_nan = mpge(&[0.0, 1800.0], &[0.0, 1000.0], &[f64::NAN, 500.0]).unwrap();
        let without = mpge(&[0.0, 1800.0], &[0.0, 1000.0], &[0.0, 500.0]).unwrap();
        assert_relative_eq!(with_nan, without);
    }

    #[test]
    fn rejects_mismatched_trace_lengths() {
        assert!(mpge(&[0.0, 1.0], &[0.0], &[0.0, 0.0]).is_err());
    }

    #[test]
    fn rejects_empty_traces() {
        assert_eq!(mpge(&[], &[], &[]).unwrap_err(), TraceError::Empty);
    }
}
