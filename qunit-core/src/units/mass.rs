//! Mass units.
//!
//! The canonical scaling unit for this dimension is [`Gram`] (`Gram::RATIO == Ratio::ONE`), so the SI ladder is
//! generated from it and [`Kilogram`] is one of its prefixed forms. Avoirdupois units use the exact international
//! definition `1 lb = 453.592_37 g`.
//!
//! ```rust
//! use qunit_core::mass::{Kilograms, Pound};
//!
//! let m = Kilograms::new(1.0_f64);
//! let lb = m.to::<Pound>();
//! assert!((lb.value() - 2.204_622_621_8).abs() < 1e-9);
//! ```

use crate::{dimension_trait, impl_unit_conversions, Dimension, Quantity};
use qunit_derive::Unit;

/// Dimension tag for mass.
pub enum Mass {}
impl Dimension for Mass {}

dimension_trait! {
    /// Marker trait for any [`Unit`](crate::Unit) whose dimension is [`Mass`].
    pub trait MassUnit for Mass
}

/// Gram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Mass, ratio = 1, metric_prefixes)]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams<T = f64> = Quantity<Gram, T>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Metric tonne (`10^6 g`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", of = Gram, ratio = 1_000_000)]
pub struct Tonne;
/// A quantity measured in tonnes.
pub type Tonnes<T = f64> = Quantity<Tonne, T>;
/// One tonne.
pub const TONNE: Tonnes = Tonnes::new(1.0);

/// Avoirdupois pound (`453.592_37 g`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", of = Gram, ratio = 45_359_237 / 100_000)]
pub struct Pound;
/// A quantity measured in pounds.
pub type Pounds<T = f64> = Quantity<Pound, T>;
/// One pound.
pub const LB: Pounds = Pounds::new(1.0);

/// Avoirdupois ounce (`1/16 lb`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", of = Pound, ratio = 1 / 16)]
pub struct Ounce;
/// A quantity measured in ounces.
pub type Ounces<T = f64> = Quantity<Ounce, T>;
/// One ounce.
pub const OZ: Ounces = Ounces::new(1.0);

impl_unit_conversions!(Gram, Milligram, Kilogram, Tonne, Pound, Ounce);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Conversion, Ratio, Unit};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn kilogram_is_prefixed_gram() {
        assert_eq!(Kilogram::RATIO, Ratio::integer(1000));
        assert_eq!(Kilogram::SYMBOL, "kg");
        assert_eq!(Kilograms::new(2.5).to::<Gram>().value(), 2500.0);
    }

    #[test]
    fn tonne() {
        assert_eq!(Conversion::<Tonne, Kilogram>::FACTOR, Ratio::integer(1000));
        assert_eq!(Tonnes::new(1.5).to::<Kilogram>().value(), 1500.0);
        assert!(Tonnes::new(1.0) == Megagrams::new(1.0));
    }

    #[test]
    fn avoirdupois_ratios_are_exact() {
        assert_eq!(Conversion::<Pound, Ounce>::FACTOR, Ratio::integer(16));
        assert_eq!(Ounce::RATIO, Ratio::new(45_359_237, 1_600_000));
        assert_eq!(Pounds::new(1.0).to::<Gram>().value(), 453.592_37);
        assert_relative_eq!(Ounces::new(1.0).to::<Gram>().value(), 28.349_523_125);
    }

    #[test]
    fn mixed_arithmetic_and_literals() {
        let total = Pounds::new(1.0) + Ounces::new(8.0);
        assert_eq!(total.value(), 1.5);
        assert_eq!(1_500_u32.g().to::<Kilogram>().value(), 1);
        assert_eq!(2.0_f64.kg(), Grams::new(2000.0));
        assert_eq!(3.0_f64.lb() + 16.0_f64.oz(), Pounds::new(4.0));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_kg_lb(k in -1e6..1e6f64) {
            let original = Kilograms::new(k);
            let back = original.to::<Pound>().to::<Kilogram>();
            prop_assert!((back.value() - k).abs() <= 1e-12 * k.abs().max(1.0));
        }
    }
}
