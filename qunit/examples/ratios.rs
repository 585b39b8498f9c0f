//! Exact conversion factors: inspect them, compare chains at compile time, and recover `Unitless`.

use qunit::{Conversion, Day, Hour, Meters, Quantity, Ratio, Simplify, Unitless, Week};

const VIA_DAYS: Ratio = Conversion::<Week, Day>::FACTOR.mul(Conversion::<Day, Hour>::FACTOR);
const _: () = assert!(VIA_DAYS.equals(Conversion::<Week, Hour>::FACTOR));

fn main() {
    println!("1 wk = {} hr", Conversion::<Week, Hour>::FACTOR);

    let half = Meters::new(1.0) / Meters::new(2.0);
    let unitless: Quantity<Unitless> = half.simplify();
    assert_eq!(unitless.value(), 0.5);
}
