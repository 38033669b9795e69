use control::{AdaptiveCruise, ControlParameters, SpacingMode};
use energy::{EnergyModel, VehicleParameters, mpge};
use simcore::LeadCycle;

// Follows a constant-speed lead with the adaptive controller and prints the
// gap convergence plus the follower's energy use.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dt = 0.5;
    let lead_speed = 20.0; // m/s
    let n = 600;

    let lead = LeadCycle::from_distance((0..n).map(|i| lead_speed * dt * i as f64).collect());
    let time: Vec<f64> = (0..n).map(|i| dt * i as f64).collect();

    let controller = AdaptiveCruise::new(ControlParameters::default(), dt, SpacingMode::GapOnly)?;
    let trace = controller.follow(&lead)?;

    for i in (0..n).step_by(40) {
        println!(
            "t={:6.1}s  gap={:7.2} m  speed={:6.2} m/s  accel={:5.2} m/s^2",
            time[i], trace.gap[i], trace.speed[i], trace.acceleration[i]
        );
    }

    let model = EnergyModel::new(VehicleParameters::default())?;
    let power = model.power_at_wheel(&trace.speed, &trace.acceleration)?;
    let battery = model.battery_trace(&power.wheel_power);
    let economy = mpge(&time, &trace.distance, &battery.power)?;

    println!(
        "final gap {:.2} m, final SOC {:.4}, {:.1} MPGe",
        trace.gap[n - 1],
        battery.state_of_charge[n - 1],
        economy
    );
    Ok(())
}
