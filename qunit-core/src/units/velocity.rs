//! Velocity unit aliases (`Length / Time`).
//!
//! Velocities are not standalone units: every velocity is `Per<LengthUnit, TimeUnit>` at the type level, and its
//! conversion factor is the quotient of the two component factors.
//!
//! ```rust
//! use qunit_core::length::{Kilometer, Kilometers, Meter};
//! use qunit_core::time::{Hour, Hours, Second};
//! use qunit_core::velocity::Velocity;
//!
//! let v: Velocity<Kilometer, Hour> = Kilometers::new(36.0) / Hours::new(1.0);
//! let mps: Velocity<Meter, Second> = v.to();
//! assert_eq!(mps.value(), 10.0);
//! assert_eq!(mps.to_string(), "10 m/s");
//! ```

use crate::units::length::Length;
use crate::units::time::Time;
use crate::{dimension_trait, DivDim, Per, Quantity};

/// Dimension alias for velocities (`Length / Time`).
pub type VelocityDim = DivDim<Length, Time>;

dimension_trait! {
    /// Marker trait for any unit whose dimension is [`VelocityDim`].
    pub trait VelocityUnit for VelocityDim
}

/// A velocity quantity parameterized by length and time units.
///
/// ```rust
/// use qunit_core::length::{Kilometer, Meter};
/// use qunit_core::time::{Hour, Second};
/// use qunit_core::velocity::Velocity;
///
/// let walking: Velocity<Kilometer, Hour> = Velocity::new(5.0);
/// let sprint: Velocity<Meter, Second> = Velocity::new(10.0);
/// assert!(sprint > walking);
/// ```
pub type Velocity<N, D, T = f64> = Quantity<Per<N, D>, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{AstronomicalUnit, Kilometer, Kilometers, Meter, Meters, Mile};
    use crate::units::time::{Day, Hour, Second, Seconds};
    use crate::{Conversion, Ratio, Simplify};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn km_per_s_to_m_per_s() {
        let v: Velocity<Kilometer, Second> = Velocity::new(1.0);
        let v_mps: Velocity<Meter, Second> = v.to();
        assert_eq!(v_mps.value(), 1000.0);
    }

    #[test]
    fn factor_is_quotient_of_components() {
        assert_eq!(Conversion::<Per<Kilometer, Hour>, Per<Meter, Second>>::FACTOR, Ratio::new(5, 18));
        assert_eq!(Conversion::<Per<Mile, Hour>, Per<Meter, Second>>::FACTOR, Ratio::new(1397, 3125));
    }

    #[test]
    fn division_builds_velocity() {
        let v = Kilometers::new(42.0) / Seconds::new(2.0);
        let typed: Velocity<Kilometer, Second> = v;
        assert_eq!(typed.value(), 21.0);
    }

    #[test]
    fn velocity_times_time_is_length() {
        let v: Velocity<Meter, Second> = Velocity::new(3.0);
        let d: Meters = (v * Seconds::new(4.0)).simplify();
        assert_eq!(d.value(), 12.0);
    }

    #[test]
    fn au_per_day() {
        let v: Velocity<AstronomicalUnit, Day> = Velocity::new(1.0);
        let kms: Velocity<Kilometer, Second> = v.to();
        assert_relative_eq!(kms.value(), 149_597_870.7 / 86_400.0, max_relative = 1e-15);
    }

    #[test]
    fn velocity_unit_predicate() {
        fn is_velocity<U: VelocityUnit>() {}
        is_velocity::<Per<Meter, Second>>();
        is_velocity::<Per<Mile, Hour>>();
    }

    proptest! {
        #[test]
        fn prop_roundtrip_kmh_mps(v in -1e6..1e6f64) {
            let kmh: Velocity<Kilometer, Hour> = Velocity::new(v);
            let back: Velocity<Kilometer, Hour> = kmh.to::<Per<Meter, Second>>().to();
            prop_assert_eq!(back, kmh);
        }
    }
}
