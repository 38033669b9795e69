use energy::{EnergyModel, VehicleParameters};
use std::fs::File;
use std::io::Write;

// Steps the battery model through a cruise / hard-accel / regen profile and
// dumps the traces to CSV for inspection.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = VehicleParameters::default();
    let dt = params.dt;
    let model = EnergyModel::new(params)?;

    // 20 m/s cruise, a 2 m/s^2 burst, then regen braking back down.
    let mut speed = Vec::new();
    let mut acceleration = Vec::new();
    let mut t = 0.0;
    while t <= 120.0 {
        let (v, a) = if t < 60.0 {
            (20.0, 0.0)
        } else if t < 70.0 {
            (20.0 + 2.0 * (t - 60.0), 2.0)
        } else if t < 80.0 {
            (40.0 - 2.0 * (t - 70.0), -2.0)
        } else {
            (20.0, 0.0)
        };
        speed.push(v);
        acceleration.push(a);
        t += dt;
    }

    let power = model.power_at_wheel(&speed, &acceleration)?;
    let battery = model.battery_trace(&power.wheel_power);

    let mut csv = File::create("soc_step.csv")?;
    writeln!(csv, "t,speed,wheel_power,battery_power,soc")?;
    for i in 0..speed.len() {
        writeln!(
            csv,
            "{:.2},{:.3},{:.1},{:.1},{:.6}",
            i as f64 * dt,
            speed[i],
            power.wheel_power[i],
            battery.power[i],
            battery.state_of_charge[i]
        )?;
    }

    println!("Wrote soc_step.csv");
    Ok(())
}
