//! Adaptive cruise control: safety/target gap regulation with bounded
//! acceleration.

use serde::{Deserialize, Serialize};
use simcore::error::{SimError, TraceError, check_length, check_timestep};
use simcore::trace::LeadCycle;

use crate::INITIAL_GAP;
use crate::params::ControlParameters;

/// Spacing policy for the adaptive controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpacingMode {
    /// Regulate toward the distance-gap target only.
    #[default]
    GapOnly,
    /// Additionally honor a time-gap (headway) requirement that scales the
    /// safe distance with the following speed.
    Headway,
}

/// Following trajectory produced by the adaptive controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveTrace {
    /// Absolute following distance (m).
    pub distance: Vec<f64>,
    /// Following speed (m/s).
    pub speed: Vec<f64>,
    /// Following acceleration (m/s^2).
    pub acceleration: Vec<f64>,
    /// Gap to the lead vehicle (m).
    pub gap: Vec<f64>,
}

/// Two-branch acceleration-based gap regulator.
///
/// Each step solves for the acceleration that would close on either the
/// minimum safe distance (safety branch, taken while `gap < gap_min`) or the
/// target distance (target branch), then saturates the command to the
/// configured bounds before integrating speed, distance and gap.
#[derive(Debug, Clone)]
pub struct AdaptiveCruise {
    params: ControlParameters,
    dt: f64,
    mode: SpacingMode,
}

/// Saturate an acceleration command: `max(min(x, upper), lower)`.
///
/// The min-then-max order is what makes inverted bounds collapse silently,
/// which is why `ControlParameters::validate` rejects them up front.
fn bound_acceleration(x: f64, upper: f64, lower: f64) -> f64 {
    x.min(upper).max(lower)
}

impl AdaptiveCruise {
    pub fn new(params: ControlParameters, dt: f64, mode: SpacingMode) -> Result<Self, SimError> {
        params.validate()?;
        check_timestep(dt)?;
        Ok(AdaptiveCruise { params, dt, mode })
    }

    pub fn mode(&self) -> SpacingMode {
        self.mode
    }

    /// Run the controller over a full lead cycle.
    ///
    /// Seeds: `gap[0] = 1 m`, `distance[0] = lead[0] - gap[0]`, speed and
    /// acceleration zero. Integration is semi-implicit: the freshly bounded
    /// acceleration updates the speed, the new speed updates the distance,
    /// and the gap is re-derived from the absolute distances.
    pub fn follow(&self, lead: &LeadCycle) -> Result<AdaptiveTrace, SimError> {
        if lead.is_empty() {
            return Err(TraceError::Empty.into());
        }
        let dt = self.dt;
        let dt2 = dt * dt;
        let p = &self.params;
        let (lead_speed, _) = lead.kinematics(dt)?;
        let n = lead.len();
        check_length(n, lead_speed.len())?;

        let mut distance = vec![0.0; n];
        let mut speed = vec![0.0; n];
        let mut acceleration = vec![0.0; n];
        let mut gap = vec![0.0; n];
        gap[0] = INITIAL_GAP;
        distance[0] = lead.distance[0] - gap[0];

        for d in 0..n - 1 {
            let closing_speed = lead_speed[d] - speed[d];

            let (accel_safe, accel_target) = match self.mode {
                SpacingMode::GapOnly => {
                    // Closed-form acceleration that lands the next gap on the
                    // requested distance.
                    let safe = gap[d] / dt2 + closing_speed / dt - p.gap_min / dt2;
                    let target = gap[d] / dt2 + closing_speed / dt - p.gap_target / dt2;
                    (safe, target)
                }
                SpacingMode::Headway => {
                    // The safe distance is whichever is larger: the fixed
                    // minimum gap or the distance covered in the minimum
                    // headway at the current following speed.
                    let gap_constraint = p.gap_min.max(speed[d] * p.headway_min);
                    let safe = gap[d] / dt2 + closing_speed / dt - gap_constraint / dt2;
                    let target = ((gap[d] + closing_speed * dt) * p.headway_target - speed[d])
                        / (1.0 + dt2 * p.headway_target);
                    (safe, target)
                }
            };

            let command = if gap[d] < p.gap_min {
                accel_safe
            } else {
                accel_target
            };
            acceleration[d + 1] =
                bound_acceleration(command, p.acceleration_max, p.acceleration_min);

            speed[d + 1] = speed[d] + acceleration[d + 1] * dt;
            distance[d + 1] = distance[d] + speed[d + 1] * dt;
            gap[d + 1] = lead.distance[d + 1] - distance[d + 1];
        }

        Ok(AdaptiveTrace {
            distance,
            speed,
            acceleration,
            gap,
        })
    }
}
