//! Classic cruise control: PD regulation of a time-gap error.

use log::debug;
use serde::{Deserialize, Serialize};
use simcore::error::{SimError, TraceError, check_length, check_timestep};
use simcore::trace::LeadCycle;

use crate::INITIAL_GAP;
use crate::params::ControlParameters;

/// Following trajectory produced by the classic controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassicTrace {
    /// Following speed (m/s).
    pub speed: Vec<f64>,
    /// Following acceleration (m/s^2).
    pub acceleration: Vec<f64>,
    /// Gap to the lead vehicle (m).
    pub gap: Vec<f64>,
}

/// PD gap controller.
///
/// Regulates the error between the current gap and a speed-scaled time-gap
/// target, `e = gap - (gap_target / lead_speed) * follow_speed`, producing a
/// following-speed trajectory with a jerk-limited speed delta per step.
#[derive(Debug, Clone)]
pub struct ClassicCruise {
    params: ControlParameters,
    dt: f64,
}

impl ClassicCruise {
    pub fn new(params: ControlParameters, dt: f64) -> Result<Self, SimError> {
        params.validate()?;
        check_timestep(dt)?;
        Ok(ClassicCruise { params, dt })
    }

    /// Run the controller over a full lead cycle.
    ///
    /// Steps where the lead speed is zero or NaN are skipped wholesale: the
    /// gap and following speed carry forward unchanged and the PD state is
    /// not updated. The time-gap target `gap_target / lead_speed` is
    /// undefined there, so holding state is the explicit degenerate-input
    /// policy rather than a computed transition.
    pub fn follow(&self, lead: &LeadCycle) -> Result<ClassicTrace, SimError> {
        if lead.is_empty() {
            return Err(TraceError::Empty.into());
        }
        let dt = self.dt;
        let p = &self.params;
        let (lead_speed, _) = lead.kinematics(dt)?;
        let n = lead.len();
        check_length(n, lead_speed.len())?;

        let mut speed = vec![0.0; n];
        let mut acceleration = vec![0.0; n];
        let mut gap = vec![0.0; n];
        gap[0] = INITIAL_GAP;

        // Seed for the derivative term. Arbitrary unit value kept from the
        // reference traces; it decays after the first regulated step.
        let mut e_prev = 1.0;

        let mut skipped = 0usize;
        for s in 0..n - 1 {
            let v_lead = lead_speed[s];
            if v_lead == 0.0 || v_lead.is_nan() {
                gap[s + 1] = gap[s];
                speed[s + 1] = speed[s];
                skipped += 1;
                continue;
            }

            gap[s + 1] = gap[s] + (v_lead - speed[s]) * dt;

            // Time-gap target expressed as a distance error.
            let tw = p.gap_target / v_lead;
            let e = gap[s + 1] - tw * speed[s];
            let e_dot = (e - e_prev) / dt;

            let mut next_speed = speed[s] + p.kp * e + p.kd * e_dot;

            // Jerk guard on the speed delta, not a true acceleration bound:
            // the lower branch clamps to half the maximum acceleration step,
            // the upper branch triggers at the full step but corrects down to
            // half of it.
            let delta = next_speed - speed[s];
            let half_step = 0.5 * p.acceleration_max * dt;
            if delta < -half_step {
                next_speed = speed[s] - half_step;
            } else if delta > p.acceleration_max * dt {
                next_speed = speed[s] + half_step;
            }

            speed[s + 1] = next_speed;
            acceleration[s] = (speed[s + 1] - speed[s]) / dt;
            e_prev = e;
        }

        if skipped > 0 {
            debug!("classic cruise held state on {skipped} zero-lead-speed steps");
        }

        Ok(ClassicTrace {
            speed,
            acceleration,
            gap,
        })
    }
}
