//! Angle helpers example: wrapping, separation and sexagesimal units.

use qunit::{Arcseconds, Degrees, Radian};

fn main() {
    let a = Degrees::new(370.0).wrap_signed();
    assert_eq!(a.value(), 10.0);

    let s = Degrees::new(45.0).signed_separation(Degrees::new(350.0));
    assert_eq!(s.value(), 55.0);

    let arcsec: Arcseconds = Degrees::new(1.0).to();
    assert_eq!(arcsec.value(), 3600.0);

    let lat = Degrees::from_dms(-33, 52, 0.0);
    println!("{lat} = {}", lat.to::<Radian>());
}
