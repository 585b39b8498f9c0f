//! Reading quantities from text and writing them back.

use qunit::velocity::Velocity;
use qunit::{Days, Hour, Kilometer, ParseQuantityError};

fn main() -> Result<(), ParseQuantityError> {
    let stay: Days = "2 d".parse()?;
    println!("{stay} is {}", stay.to::<Hour>());
    assert_eq!(stay.to_string(), "2 d");

    let speed: Velocity<Kilometer, Hour> = "90 km/hr".parse()?;
    println!("speed: {speed}");

    for bad in ["", "2", "2 wk", "two d"] {
        match bad.parse::<Days>() {
            Ok(q) => println!("{bad:?} -> {q}"),
            Err(e) => println!("{bad:?} -> error: {e}"),
        }
    }
    Ok(())
}
