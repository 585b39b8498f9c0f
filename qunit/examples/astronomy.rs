//! Astronomy-flavored example using AU, light-years, and an orbital velocity estimate.

use qunit::velocity::Velocity;
use qunit::{AstronomicalUnits, Days, Kilometer, Kilometers, LightYears, Second, Seconds, Simplify};

fn main() {
    let earth_velocity: Velocity<Kilometer, Second> = Velocity::new(29.78);
    let time_sec: Seconds = Days::new(1.0).to();
    let distance: Kilometers = (earth_velocity * time_sec).simplify();
    println!("Earth covers {distance} per day");
    assert!((distance.value() - 2_572_992.0).abs() < 1.0);

    let proxima = LightYears::new(4.24);
    let au: AstronomicalUnits = proxima.to();
    println!("Proxima Centauri: {proxima} = {au:.0}");
    assert!(au.value() > 200_000.0);
}
