//! Drive-cycle comparison demo.
//!
//! Builds a synthetic highway-style lead cycle, runs the energy model over
//! the lead itself (standard vehicle baseline) and over the trajectories the
//! classic and adaptive controllers produce for a following vehicle, then
//! reports MPGe for each run as a JSON summary.

use control::{AdaptiveCruise, ClassicCruise, ControlParameters, SpacingMode};
use energy::{EnergyModel, VehicleParameters, mpge};
use log::info;
use serde::Serialize;
use simcore::{LeadCycle, integrate_distance};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Debug, Serialize)]
struct RunSummary {
    label: String,
    final_soc: f64,
    mpge: f64,
}

#[derive(Debug, Serialize)]
struct ComparisonSummary {
    dt: f64,
    duration_s: f64,
    runs: Vec<RunSummary>,
}

/// Trapezoidal highway profile: ramp to cruise, hold, ramp down, with a
/// short full stop in the middle to exercise the degenerate-speed policies.
fn synthetic_lead_cycle(dt: f64) -> (Vec<f64>, Vec<f64>) {
    let mut time = Vec::new();
    let mut position = Vec::new();
    let mut x = 0.0;
    let mut t = 0.0;
    while t <= 600.0 {
        let v: f64 = if t < 60.0 {
            t / 60.0 * 26.0
        } else if t < 280.0 {
            26.0
        } else if t < 300.0 {
            26.0 * (1.0 - (t - 280.0) / 20.0)
        } else if t < 320.0 {
            0.0
        } else if t < 360.0 {
            (t - 320.0) / 40.0 * 26.0
        } else if t < 560.0 {
            26.0
        } else {
            (26.0 * (1.0 - (t - 560.0) / 40.0)).max(0.0)
        };
        time.push(t);
        position.push(x);
        x += v * dt;
        t += dt;
    }
    (time, position)
}

fn summarize(
    label: &str,
    model: &EnergyModel,
    time: &[f64],
    distance: &[f64],
    speed: &[f64],
    acceleration: &[f64],
) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let power = model.power_at_wheel(speed, acceleration)?;
    let battery = model.battery_trace(&power.wheel_power);
    let economy = mpge(time, distance, &battery.power)?;
    let final_soc = *battery.state_of_charge.last().unwrap_or(&0.0);

    info!("{label}: final SOC {final_soc:.4}, {economy:.1} MPGe");
    Ok(RunSummary {
        label: label.to_string(),
        final_soc,
        mpge: economy,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let vehicle = VehicleParameters::default();
    let dt = vehicle.dt;
    let model = EnergyModel::new(vehicle)?;
    let control_params = ControlParameters::default();

    let (time, lead_position) = synthetic_lead_cycle(dt);
    let lead = LeadCycle::from_distance(lead_position);
    info!(
        "synthetic lead cycle: {} samples over {:.0} s",
        lead.len(),
        time.last().unwrap()
    );

    let mut runs = Vec::new();

    // Standard vehicle: the lead drives the cycle itself.
    let (lead_speed, lead_acceleration) = lead.kinematics(dt)?;
    runs.push(summarize(
        "standard",
        &model,
        &time,
        &lead.distance,
        &lead_speed,
        &lead_acceleration,
    )?);

    // Classic PD follower. The controller reports no absolute distance, so
    // integrate its speed trace from the seeded start position.
    let classic = ClassicCruise::new(control_params.clone(), dt)?;
    let trace = classic.follow(&lead)?;
    let classic_distance = integrate_distance(lead.distance[0] - control::INITIAL_GAP, &trace.speed, dt);
    runs.push(summarize(
        "classic cruise",
        &model,
        &time,
        &classic_distance,
        &trace.speed,
        &trace.acceleration,
    )?);

    // Adaptive follower, both spacing modes.
    for (label, mode) in [
        ("adaptive (gap only)", SpacingMode::GapOnly),
        ("adaptive (headway)", SpacingMode::Headway),
    ] {
        let adaptive = AdaptiveCruise::new(control_params.clone(), dt, mode)?;
        let trace = adaptive.follow(&lead)?;
        runs.push(summarize(
            label,
            &model,
            &time,
            &trace.distance,
            &trace.speed,
            &trace.acceleration,
        )?);
    }

    let summary = ComparisonSummary {
        dt,
        duration_s: *time.last().unwrap(),
        runs,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
