//! Core trace types and shared numerics for the drive-cycle follower simulation.
//!
//! Everything downstream (the controllers in `control`, the energy model in
//! `energy`) works on plain `f64` traces with a fixed timestep. This crate
//! owns the input contract for those traces, the finite-difference kinematics
//! estimator, and the distance/gap bookkeeping both controllers share.

pub mod bookkeeping;
pub mod error;
pub mod kinematics;
pub mod trace;

pub use bookkeeping::{gap_trace, integrate_distance};
pub use error::{ConfigError, SimError, TraceError};
pub use kinematics::speed_and_acceleration;
pub use trace::{DriveCycleSample, LeadCycle, MeasuredKinematics};
