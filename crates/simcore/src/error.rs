use thiserror::Error;

/// Rejected at construction time. A run must never start with one of these;
/// the degenerate numerical policies downstream assume a valid configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("timestep must be positive, got {0} s")]
    NonPositiveTimestep(f64),
    #[error("acceleration bounds inverted: min {min} m/s^2 > max {max} m/s^2")]
    InvertedAccelerationBounds { min: f64, max: f64 },
    #[error("battery capacity must be positive, got {0} Ah")]
    NonPositiveCapacity(f64),
    #[error("battery internal resistance must be positive, got {0} ohm")]
    NonPositiveResistance(f64),
    #[error("nominal battery voltage must be positive, got {0} V")]
    NonPositiveVoltage(f64),
    #[error("drivetrain efficiency must lie in (0, 1], got {0}")]
    InvalidEfficiency(f64),
    #[error("gap setting must be positive, got {0} m")]
    NonPositiveGap(f64),
    #[error("headway setting must be positive, got {0} s")]
    NonPositiveHeadway(f64),
}

/// Shape problems in the input traces, rejected before any output is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    #[error("trace is empty")]
    Empty,
    #[error("trace length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Umbrella error for simulation entry points that can fail both ways.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Check a parallel trace against the reference length.
pub fn check_length(expected: usize, actual: usize) -> Result<(), TraceError> {
    if actual != expected {
        return Err(TraceError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Check that a simulation timestep is usable.
pub fn check_timestep(dt: f64) -> Result<(), ConfigError> {
    if !(dt > 0.0) {
        return Err(ConfigError::NonPositiveTimestep(dt));
    }
    Ok(())
}
