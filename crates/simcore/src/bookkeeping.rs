//! Distance and gap bookkeeping shared by the following controllers.

use crate::error::{TraceError, check_length};

/// Integrate a speed trace into an absolute-distance trace.
///
/// Semi-implicit convention, matching the controllers' in-loop integration:
/// each step advances the position with the speed already updated for that
/// step, `distance[i] = distance[i - 1] + speed[i] * dt`.
pub fn integrate_distance(start: f64, speed: &[f64], dt: f64) -> Vec<f64> {
    let mut distance = vec![0.0; speed.len()];
    if speed.is_empty() {
        return distance;
    }
    distance[0] = start;
    for i in 1..speed.len() {
        distance[i] = distance[i - 1] + speed[i] * dt;
    }
    distance
}

/// Per-sample gap between the lead and following distance traces.
pub fn gap_trace(lead_distance: &[f64], follow_distance: &[f64]) -> Result<Vec<f64>, TraceError> {
    check_length(lead_distance.len(), follow_distance.len())?;
    Ok(lead_distance
        .iter()
        .zip(follow_distance)
        .map(|(lead, follow)| lead - follow)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constant_speed_integrates_linearly() {
        let speed = vec![10.0; 5];
        let distance = integrate_distance(0.0, &speed, 0.5);
        // distance[0] is the seed; the first speed sample never contributes.
        assert_eq!(distance, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn start_offset_is_carried() {
        let distance = integrate_distance(-1.0, &[0.0, 2.0], 0.5);
        assert_relative_eq!(distance[0], -1.0);
        assert_relative_eq!(distance[1], 0.0);
    }

    #[test]
    fn gap_is_lead_minus_follow() {
        let gap = gap_trace(&[10.0, 20.0], &[9.0, 15.0]).unwrap();
        assert_eq!(gap, vec![1.0, 5.0]);
    }

    #[test]
    fn gap_rejects_mismatched_lengths() {
        assert!(gap_trace(&[10.0, 20.0], &[9.0]).is_err());
    }
}
