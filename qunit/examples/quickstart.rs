//! Minimal end-to-end example: convert time units and compute a velocity (length / time).

use qunit::velocity::Velocity;
use qunit::{Hours, Kilometer, Kilometers, Minute, Second, Seconds};

fn main() {
    let h = Hours::new(1.0);
    let m = h.to::<Minute>();
    let s = m.to::<Second>();
    println!("{h} = {m} = {s}");
    assert_eq!(s.value(), 3600.0);

    let d = Kilometers::new(1_000.0);
    let t = Seconds::new(100.0);
    let v: Velocity<Kilometer, Second> = d / t;
    println!("{d} in {t} is {v}");
    assert_eq!(v.value(), 10.0);
}
