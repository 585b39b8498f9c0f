//! Core type system for strongly typed, exactly converted quantities.
//!
//! `qunit-core` provides a zero-cost units model:
//!
//! - A *dimension* is an uninhabited tag type implementing [`Dimension`] (time, length, mass, ...).
//! - A *unit* is a zero-sized marker type implementing [`Unit`]; its [`Unit::RATIO`] is an exact [`Ratio`] to the
//!   canonical unit of its dimension.
//! - A value tagged with a unit is a [`Quantity<U, T>`], backed by any [`Scalar`] (`f64` by default).
//! - Conversion is an explicit, type-checked scaling via [`Quantity::to`]; its factor is computed at compile time.
//! - Derived units are expressed as [`Per<N, D>`] and [`Prod<A, B>`].
//!
//! Most users should depend on `qunit` (the facade crate) unless they need direct access to these primitives.
//!
//! # Quick start
//!
//! ```rust
//! use qunit_core::time::{Hours, Minute, Second};
//!
//! let h = Hours::new(1.0);
//! assert_eq!(h.to::<Minute>().value(), 60.0);
//! assert_eq!(h.to::<Second>().value(), 3600.0);
//! assert_eq!(h.to_string(), "1 hr");
//! ```
//!
//! Integer representations convert with the same exact factors:
//!
//! ```rust
//! use qunit_core::time::{Minutes, MinuteLiteral, Second};
//!
//! let m: Minutes<i32> = 5_i32.mins();
//! assert_eq!(m.to::<Second>().value(), 300);
//! ```
//!
//! Text round-trips through [`core::str::FromStr`]:
//!
//! ```rust
//! use qunit_core::time::Days;
//!
//! let d: Days = "2 d".parse()?;
//! assert_eq!(d, Days::new(2.0));
//! # Ok::<(), qunit_core::ParseQuantityError>(())
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `qunit-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! qunit-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Panics and errors
//!
//! Conversions and arithmetic never return `Result`. Floating-point values follow IEEE-754 (NaN and infinities
//! propagate); integer values truncate toward zero when a conversion factor is fractional, and out-of-range
//! conversions panic under `debug_assertions` and wrap otherwise, like the native integer operators. Parsing reports
//! failures through [`ParseQuantityError`].

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod macros;
mod parse;
mod quantity;
mod ratio;
mod scalar;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{same_dimension, Dimension, Dimensionless, DivDim, MulDim};
pub use parse::ParseQuantityError;
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use scalar::Scalar;
pub use unit::{Conversion, Per, Prod, Simplify, Unit, Unitless};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `qunit-core` so they can implement formatting, parsing and conversion traits without running
/// into Rust's orphan rules.
pub mod units;

pub use units::angle;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::time;
pub use units::unitless;
pub use units::velocity;

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Hand-written units, independent of the derive
    // ─────────────────────────────────────────────────────────────────────────────
    #[derive(Debug)]
    pub enum TestDim {}
    impl Dimension for TestDim {}

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum TestUnit {}
    impl Unit for TestUnit {
        const RATIO: Ratio = Ratio::ONE;
        type Dim = TestDim;
        const SYMBOL: &'static str = "tu";
        const NAME: &'static str = "test unit";
        const PLURAL: &'static str = "test units";
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum DoubleTestUnit {}
    impl Unit for DoubleTestUnit {
        const RATIO: Ratio = Ratio::integer(2);
        type Dim = TestDim;
        const SYMBOL: &'static str = "dtu";
        const NAME: &'static str = "double test unit";
        const PLURAL: &'static str = "double test units";
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum ThirdTestUnit {}
    impl Unit for ThirdTestUnit {
        const RATIO: Ratio = Ratio::new(1, 3);
        type Dim = TestDim;
        const SYMBOL: &'static str = "ttu";
        const NAME: &'static str = "third test unit";
        const PLURAL: &'static str = "third test units";
    }

    type TU = Quantity<TestUnit>;
    type Dtu = Quantity<DoubleTestUnit>;
    type Ttu<T = f64> = Quantity<ThirdTestUnit, T>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_new_and_value() {
        let q = TU::new(42.0);
        assert_eq!(q.value(), 42.0);
        assert_eq!(core::mem::size_of::<TU>(), core::mem::size_of::<f64>());
        assert_eq!(core::mem::size_of::<Ttu<i32>>(), core::mem::size_of::<i32>());
    }

    #[test]
    fn quantity_constants() {
        assert!(TU::NAN.value().is_nan());
        assert_eq!(TU::ZERO.value(), 0.0);
        assert_eq!(Ttu::<u32>::ONE.value(), 1);
        assert_eq!(TU::default(), TU::ZERO);
    }

    #[test]
    fn quantity_abs() {
        assert_eq!(TU::new(-5.0).abs().value(), 5.0);
        assert_eq!(TU::new(5.0).abs().value(), 5.0);
        assert_eq!(Ttu::new(-7_i64).abs().value(), 7);
    }

    #[test]
    fn quantity_from_scalar() {
        let q: TU = 123.456.into();
        assert_eq!(q.value(), 123.456);
        let q: Ttu<i32> = 4.into();
        assert_eq!(q.value(), 4);
    }

    #[test]
    fn unit_metadata() {
        let q = Dtu::new(1.0);
        assert_eq!(q.name(), "double test unit");
        assert_eq!(q.plural_name(), "double test units");
        assert_eq!(q.abbreviation(), "dtu");
        assert_eq!(q.ratio(), Ratio::integer(2));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion via `to`
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn conversion_to_same_unit() {
        assert!(Conversion::<TestUnit, TestUnit>::IDENTITY);
        assert_eq!(TU::new(10.0).to::<TestUnit>().value(), 10.0);
    }

    #[test]
    fn conversion_to_different_unit() {
        // 1 dtu = 2 tu, so 10 tu = 5 dtu
        assert_eq!(Conversion::<TestUnit, DoubleTestUnit>::FACTOR, Ratio::new(1, 2));
        assert_eq!(TU::new(10.0).to::<DoubleTestUnit>().value(), 5.0);
        assert_eq!(Dtu::new(1.0).to::<ThirdTestUnit>().value(), 6.0);
    }

    #[test]
    fn integer_conversion_truncates() {
        let q: Ttu<i32> = Quantity::new(5);
        assert_eq!(q.to::<TestUnit>().value(), 1);
        assert_eq!(q.to::<DoubleTestUnit>().value(), 0);
        let back: Ttu<i32> = Quantity::<DoubleTestUnit, i32>::new(3).to();
        assert_eq!(back.value(), 18);
    }

    #[test]
    fn conversion_roundtrip() {
        let original = TU::new(100.0);
        let back = original.to::<ThirdTestUnit>().to::<TestUnit>();
        assert_eq!(back.value(), original.value());
    }

    #[test]
    fn same_dimension_check() {
        assert!(same_dimension::<TestUnit, ThirdTestUnit>());
        assert!(!same_dimension::<TestUnit, time::Second>());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Const helpers
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn const_add_sub() {
        const A: TU = TU::new(3.0);
        const B: TU = TU::new(7.0);
        const SUM: TU = A.add(B);
        const DIFF: TU = B.sub(A);
        assert_eq!(SUM.value(), 10.0);
        assert_eq!(DIFF.value(), 4.0);
    }

    #[test]
    fn min_max() {
        let a = TU::new(5.0);
        let b = TU::new(3.0);
        assert_eq!(a.min(b).value(), 3.0);
        assert_eq!(b.max(a).value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operator traits
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_sub() {
        assert_eq!((TU::new(3.0) + TU::new(7.0)).value(), 10.0);
        assert_eq!((TU::new(10.0) - TU::new(3.0)).value(), 7.0);
    }

    #[test]
    fn cross_unit_add_keeps_left_unit() {
        let sum = TU::new(1.0) + Dtu::new(1.0);
        assert_eq!(sum.value(), 3.0);
        let sum = Dtu::new(1.0) + TU::new(1.0);
        assert_eq!(sum.value(), 1.5);
        let diff = Ttu::new(9_i32) - Quantity::<TestUnit, i32>::new(1);
        assert_eq!(diff.value(), 6);
    }

    #[test]
    fn operator_scalar() {
        let q = TU::new(5.0);
        assert_eq!((q * 3.0).value(), 15.0);
        assert_eq!((3.0 * q).value(), 15.0);
        assert_eq!((q / 2.0).value(), 2.5);
        assert_eq!((TU::new(10.0) % 3.0).value(), 1.0);
        assert_eq!((Ttu::new(7_u64) * 3).value(), 21);
    }

    #[test]
    fn operator_neg() {
        let q = TU::new(5.0);
        assert_eq!((-q).value(), -5.0);
        assert_eq!((-(-q)).value(), 5.0);
    }

    #[test]
    fn assignment_operators() {
        let mut q = TU::new(5.0);
        q += TU::new(3.0);
        assert_eq!(q.value(), 8.0);
        q -= Dtu::new(1.0);
        assert_eq!(q.value(), 6.0);
        q *= 2.0;
        assert_eq!(q.value(), 12.0);
        q /= 4.0;
        assert_eq!(q.value(), 3.0);
    }

    #[test]
    fn comparison_across_units() {
        assert!(TU::new(2.0) == Dtu::new(1.0));
        assert!(TU::new(3.0) > Dtu::new(1.0));
        assert!(Ttu::new(3.0) < TU::new(1.5));
        assert!(TU::new(5.0) == 5.0);
        assert!(TU::NAN != TU::NAN);
    }

    #[test]
    fn sum_iterator() {
        let total: TU = [1.0, 2.0, 3.5].into_iter().map(TU::new).sum();
        assert_eq!(total.value(), 6.5);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Per / Prod and simplification
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn division_creates_per_type() {
        let ratio: Quantity<Per<TestUnit, DoubleTestUnit>> = TU::new(100.0) / Dtu::new(20.0);
        assert_eq!(ratio.value(), 5.0);
    }

    #[test]
    fn per_ratio_conversion() {
        let v1: Quantity<Per<DoubleTestUnit, TestUnit>> = Quantity::new(10.0);
        let v2: Quantity<Per<TestUnit, TestUnit>> = v1.to();
        assert_eq!(v2.value(), 20.0);
    }

    #[test]
    fn product_ratio() {
        assert_eq!(<Prod<DoubleTestUnit, ThirdTestUnit> as Unit>::RATIO, Ratio::new(2, 3));
        let area: Quantity<Prod<TestUnit, DoubleTestUnit>> = TU::new(3.0) * Dtu::new(2.0);
        assert_eq!(area.value(), 6.0);
    }

    #[test]
    fn per_multiplication_recovers_numerator() {
        let rate: Quantity<Per<TestUnit, DoubleTestUnit>> = Quantity::new(5.0);
        let time = Dtu::new(4.0);
        let result1: TU = (rate * time).simplify();
        let result2: TU = (time * rate).simplify();
        assert_eq!(result1.value(), 20.0);
        assert_eq!(result1, result2);
    }

    #[test]
    fn simplify_per_u_u_to_unitless() {
        let ratio: Quantity<Per<TestUnit, TestUnit>> = Quantity::new(1.23456);
        let unitless: Quantity<Unitless> = ratio.simplify();
        assert_eq!(unitless.value(), 1.23456);
    }

    #[test]
    fn simplify_per_n_per_n_d_to_d() {
        let q: Quantity<Per<TestUnit, Per<TestUnit, DoubleTestUnit>>> = Quantity::new(7.5);
        let simplified: Dtu = q.simplify();
        assert_eq!(simplified.value(), 7.5);
    }

    #[test]
    fn simplify_product_over_factor() {
        let q: Quantity<Per<Prod<TestUnit, DoubleTestUnit>, DoubleTestUnit>> = Quantity::new(2.0);
        let simplified: TU = q.simplify();
        assert_eq!(simplified.value(), 2.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_simple_quantity() {
        assert_eq!(format!("{}", TU::new(42.5)), "42.5 tu");
        assert_eq!(format!("{}", TU::new(-99.9)), "-99.9 tu");
        assert_eq!(format!("{:.1}", TU::new(2.26)), "2.3 tu");
        assert_eq!(format!("{}", Ttu::new(3_u32)), "3 ttu");
    }

    #[test]
    fn display_compound_quantity() {
        let q: Quantity<Per<TestUnit, DoubleTestUnit>> = Quantity::new(2.5);
        assert_eq!(format!("{}", q), "2.5 tu/dtu");
        let q: Quantity<Prod<TestUnit, ThirdTestUnit>> = Quantity::new(4.0);
        assert_eq!(format!("{}", q), "4 tu*ttu");
    }

    #[test]
    fn parse_hand_written_unit() {
        let q: Dtu = "1.5 dtu".parse().unwrap();
        assert_eq!(q.value(), 1.5);
        assert_eq!("1.5 tu".parse::<Dtu>(), Err(ParseQuantityError::UnitMismatch));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Edge cases
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn edge_case_zero() {
        let zero = TU::new(0.0);
        assert_eq!((-zero).value(), 0.0);
        assert_eq!(zero.to::<ThirdTestUnit>().value(), 0.0);
    }

    #[test]
    fn edge_case_infinity() {
        let inf = TU::new(f64::INFINITY);
        assert!(inf.to::<DoubleTestUnit>().value().is_infinite());
        assert!(TU::NAN.to::<ThirdTestUnit>().value().is_nan());
    }
}
