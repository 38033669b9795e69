//! Input data contract for a recorded lead-vehicle drive cycle.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, TraceError, check_length};
use crate::kinematics::speed_and_acceleration;

/// One raw point of a recorded drive cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DriveCycleSample {
    /// Timestamp (s). Strictly increasing, constant step.
    pub time: f64,
    /// Absolute lead-vehicle position (m).
    pub lead_position: f64,
}

/// Ground-truth speed and acceleration columns from a recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasuredKinematics {
    pub speed: Vec<f64>,
    pub acceleration: Vec<f64>,
}

/// Lead-vehicle trajectory handed to the controllers.
///
/// Always carries the absolute distance trace. When the recording also
/// provides measured speed and acceleration they are passed through as-is;
/// otherwise the controllers fall back to finite differencing. The two forms
/// are interchangeable: same lengths, same indexing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCycle {
    pub distance: Vec<f64>,
    pub measured: Option<MeasuredKinematics>,
}

impl LeadCycle {
    /// Distance-only cycle; controllers derive speed and acceleration.
    pub fn from_distance(distance: Vec<f64>) -> Self {
        LeadCycle {
            distance,
            measured: None,
        }
    }

    /// Cycle with ground-truth speed and acceleration columns.
    pub fn with_measured(
        distance: Vec<f64>,
        speed: Vec<f64>,
        acceleration: Vec<f64>,
    ) -> Result<Self, TraceError> {
        check_length(distance.len(), speed.len())?;
        check_length(distance.len(), acceleration.len())?;
        Ok(LeadCycle {
            distance,
            measured: Some(MeasuredKinematics {
                speed,
                acceleration,
            }),
        })
    }

    /// Build a distance-only cycle from raw recorded samples.
    pub fn from_samples(samples: &[DriveCycleSample]) -> Self {
        LeadCycle::from_distance(samples.iter().map(|s| s.lead_position).collect())
    }

    pub fn len(&self) -> usize {
        self.distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    /// Resolve the lead speed and acceleration traces, deriving them from the
    /// distance trace when no measured columns are present.
    pub fn kinematics(&self, dt: f64) -> Result<(Vec<f64>, Vec<f64>), SimError> {
        match &self.measured {
            Some(m) => Ok((m.speed.clone(), m.acceleration.clone())),
            None => speed_and_acceleration(&self.distance, dt),
        }
    }
}
