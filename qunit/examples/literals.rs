//! Literal suffixes on plain numbers, including integer representations.

use qunit::*;

fn main() {
    let break_time = 5_i32.mins() + 120_i32.s();
    println!("break: {break_time}");
    assert_eq!(break_time, Minutes::new(7));

    // integer representations truncate fractional results
    assert_eq!(90_i32.s().to::<Minute>(), 1_i32.mins());

    let lap = 400.0_f64.m();
    let total = lap * 25.0;
    println!("{} laps of {lap} = {}", 25, total.to::<Kilometer>());
    assert_eq!(total.to::<Kilometer>().value(), 10.0);

    let parcel = 2.0_f64.kg() + 500.0_f64.g();
    println!("parcel: {parcel}");
    assert_eq!(parcel.value(), 2.5);
}
