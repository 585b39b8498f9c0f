//! Length units.
//!
//! The canonical scaling unit for this dimension is [`Meter`] (`Meter::RATIO == Ratio::ONE`). Imperial units follow
//! the international yard and pound agreement (`1 in = 0.0254 m` exactly), so their ratios are exact fractions.
//!
//! Notes on definitions used here:
//!
//! - **Astronomical unit (au)** is **exactly** `149_597_870_700 m` (IAU 2012).
//! - **Light-year (ly)** is the distance light travels in one Julian year: `299_792_458 m/s · 31_557_600 s`, an
//!   exact integer.
//! - **Parsec (pc)** is `au · 648_000 / π`; it has no exact rational form and goes through
//!   [`Ratio::approximate`](crate::Ratio::approximate).
//!
//! ```rust
//! use qunit_core::length::{AstronomicalUnits, Kilometer};
//!
//! let au = AstronomicalUnits::new(1.0);
//! let km = au.to::<Kilometer>();
//! assert_eq!(km.value(), 149_597_870.7);
//! ```

use crate::{dimension_trait, impl_unit_conversions, Dimension, Quantity, Ratio};
use core::f64::consts::PI;
use qunit_derive::Unit;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {}

dimension_trait! {
    /// Marker trait for any [`Unit`](crate::Unit) whose dimension is [`Length`].
    pub trait LengthUnit for Length
}

// ─────────────────────────────────────────────────────────────────────────────
// SI
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length, ratio = 1, metric_prefixes)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters<T = f64> = Quantity<Meter, T>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// International imperial units
// ─────────────────────────────────────────────────────────────────────────────

/// International foot (`0.3048 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", name = "foot", plural = "feet", of = Meter, ratio = 3048 / 10000)]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet<T = f64> = Quantity<Foot, T>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// International inch (`1/12 ft = 0.0254 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", name = "inch", plural = "inches", of = Foot, ratio = 1 / 12, literal = "inch")]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches<T = f64> = Quantity<Inch, T>;
/// One inch.
pub const INCH: Inches = Inches::new(1.0);

/// International yard (`3 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", of = Foot, ratio = 3)]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards<T = f64> = Quantity<Yard, T>;
/// One yard.
pub const YD: Yards = Yards::new(1.0);

/// Statute mile (`5280 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", of = Foot, ratio = 5280)]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles<T = f64> = Quantity<Mile, T>;
/// One mile.
pub const MI: Miles = Miles::new(1.0);

/// International nautical mile (`1852 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nmi", name = "nautical mile", plural = "nautical miles", of = Meter, ratio = 1852)]
pub struct NauticalMile;
/// A quantity measured in nautical miles.
pub type NauticalMiles<T = f64> = Quantity<NauticalMile, T>;
/// One nautical mile.
pub const NMI: NauticalMiles = NauticalMiles::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Astronomy
// ─────────────────────────────────────────────────────────────────────────────

/// Astronomical unit (`149_597_870_700 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "au",
    name = "astronomical unit",
    plural = "astronomical units",
    of = Meter,
    ratio = 149_597_870_700
)]
pub struct AstronomicalUnit;
/// A quantity measured in astronomical units.
pub type AstronomicalUnits<T = f64> = Quantity<AstronomicalUnit, T>;
/// One astronomical unit.
pub const AU: AstronomicalUnits = AstronomicalUnits::new(1.0);

/// Light-year (`c · 1 a_j`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ly", name = "light-year", plural = "light-years", of = Meter, ratio = 9_460_730_472_580_800)]
pub struct LightYear;
/// A quantity measured in light-years.
pub type LightYears<T = f64> = Quantity<LightYear, T>;
/// One light-year.
pub const LY: LightYears = LightYears::new(1.0);

/// Parsec (`648_000 / π au`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pc", of = Meter, ratio = Ratio::approximate(149_597_870_700.0 * 648_000.0 / PI))]
pub struct Parsec;
/// A quantity measured in parsecs.
pub type Parsecs<T = f64> = Quantity<Parsec, T>;
/// One parsec.
pub const PC: Parsecs = Parsecs::new(1.0);

impl_unit_conversions!(
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Foot,
    Inch,
    Yard,
    Mile,
    NauticalMile,
    AstronomicalUnit,
    LightYear,
    Parsec
);
