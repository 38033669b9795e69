//! Car-following controllers
//!
//! Two strategies for turning a lead-vehicle drive cycle into a following
//! trajectory: a classic PD time-gap regulator (`ClassicCruise`) and an
//! adaptive safety/target gap regulator with bounded acceleration
//! (`AdaptiveCruise`). Both operate on a fully materialized lead trace and
//! produce index-aligned output traces; neither issues live actuator
//! commands.

pub mod adaptive;
pub mod classic;
pub mod params;

pub use adaptive::{AdaptiveCruise, AdaptiveTrace, SpacingMode};
pub use classic::{ClassicCruise, ClassicTrace};
pub use params::ControlParameters;

/// Initial gap seed (m). Non-zero so the first gap recurrence step does not
/// start from a degenerate zero separation.
pub const INITIAL_GAP: f64 = 1.0;
