//! Time units.
//!
//! The canonical scaling unit for this dimension is [`Second`] (`Second::RATIO == Ratio::ONE`). Every other unit is
//! defined relative to the one below it, and the chain is composed exactly: `Week::RATIO` is `7 · 24 · 60 · 60`,
//! not a rounded float.
//!
//! ## Conventions
//!
//! - The **SI second** is the canonical unit and carries the full metric-prefix family ([`Millisecond`],
//!   [`Kilosecond`], ...).
//! - [`Day`] is the civil day of `86_400 s` (leap seconds ignored); [`Year`] is `365 d`.
//! - [`JulianYear`] (`a_j`, `365.25 d`) and [`GregorianYear`] (`a_g`, `365.2425 d`) are the astronomical and
//!   calendar mean years.
//!
//! ```rust
//! use qunit_core::time::{Hours, Second, Hour};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert_eq!(seconds.value(), 1800.0);
//!
//! let back = seconds.to::<Hour>();
//! assert_eq!(back.value(), 0.5);
//! ```
//!
//! Literal suffixes come from the `*Literal` traits:
//!
//! ```rust
//! use qunit_core::time::{HourLiteral, MinuteLiteral, Minutes};
//!
//! assert_eq!(5_i32.mins(), Minutes::new(5));
//! assert_eq!(1.5_f64.hr(), 90.0_f64.mins());
//! ```

use crate::{dimension_trait, impl_unit_conversions, Dimension, Quantity};
use qunit_derive::Unit;

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {}

dimension_trait! {
    /// Marker trait for any [`Unit`](crate::Unit) whose dimension is [`Time`].
    pub trait TimeUnit for Time
}

/// Seconds (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time, ratio = 1, metric_prefixes)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds<T = f64> = Quantity<Second, T>;
/// A constant representing one second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Minutes (`1 min = 60 s`). The literal suffix is `mins`, since `min` is already a method on numbers.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", of = Second, ratio = 60, plural_tag)]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes<T = f64> = Quantity<Minute, T>;
/// A constant representing one minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hours (`1 hr = 60 min`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hr", of = Minute, ratio = 60)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours<T = f64> = Quantity<Hour, T>;
/// A constant representing one hour.
pub const HOUR: Hours = Hours::new(1.0);

/// Civil days (`1 d = 24 hr`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = Time, of = Hour, ratio = 24)]
pub struct Day;
/// A quantity measured in days.
pub type Days<T = f64> = Quantity<Day, T>;
/// A constant representing one day.
pub const DAY: Days = Days::new(1.0);

/// Weeks (`1 wk = 7 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "wk", of = Day, ratio = 7)]
pub struct Week;
/// A quantity measured in weeks.
pub type Weeks<T = f64> = Quantity<Week, T>;
/// A constant representing one week.
pub const WEEK: Weeks = Weeks::new(1.0);

/// Fortnights (`1 fortnight = 14 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "fn", of = Week, ratio = 2, literal = "fortnight")]
pub struct Fortnight;
/// A quantity measured in fortnights.
pub type Fortnights<T = f64> = Quantity<Fortnight, T>;
/// A constant representing one fortnight.
pub const FORTNIGHT: Fortnights = Fortnights::new(1.0);

/// Common years (`1 yr = 365 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yr", of = Day, ratio = 365)]
pub struct Year;
/// A quantity measured in years.
pub type Years<T = f64> = Quantity<Year, T>;
/// A constant representing one year.
pub const YEAR: Years = Years::new(1.0);

/// Julian years (`1 a_j = 365.25 d = 31_557_600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "a_j", name = "julian year", plural = "julian years", of = Second, ratio = 31_557_600)]
pub struct JulianYear;
/// A quantity measured in Julian years.
pub type JulianYears<T = f64> = Quantity<JulianYear, T>;
/// A constant representing one Julian year.
pub const JULIAN_YEAR: JulianYears = JulianYears::new(1.0);

/// Julian centuries (`1 JC = 100 a_j = 36_525 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "JC", name = "julian century", plural = "julian centuries", of = JulianYear, ratio = 100)]
pub struct JulianCentury;
/// A quantity measured in Julian centuries.
pub type JulianCenturies<T = f64> = Quantity<JulianCentury, T>;
/// A constant representing one Julian century.
pub const JULIAN_CENTURY: JulianCenturies = JulianCenturies::new(1.0);

/// Gregorian years (`1 a_g = 365.2425 d = 31_556_952 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "a_g", name = "gregorian year", plural = "gregorian years", of = Second, ratio = 31_556_952)]
pub struct GregorianYear;
/// A quantity measured in Gregorian years.
pub type GregorianYears<T = f64> = Quantity<GregorianYear, T>;
/// A constant representing one Gregorian year.
pub const GREGORIAN_YEAR: GregorianYears = GregorianYears::new(1.0);

impl_unit_conversions!(
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
    Minute,
    Hour,
    Day,
    Week,
    Fortnight,
    Year,
    JulianYear,
    JulianCentury,
    GregorianYear
);
