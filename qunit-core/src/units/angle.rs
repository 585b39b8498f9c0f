//! Angular quantities and utilities.
//!
//! # Design overview
//!
//! * **Canonical unit:** the [`Radian`] (`Radian::RATIO == Ratio::ONE`).
//! * **π-based factors:** one [`Turn`] is `τ` radians, which has no exact rational form. It is expressed with
//!   [`Ratio::approximate`], and every sexagesimal unit ([`Degree`], [`Arcminute`], [`Arcsecond`]) and the
//!   [`Gradian`] are exact fractions *of a turn*. Conversions between those units are therefore exact
//!   (`1° = 3600″`), and only conversions to or from radians carry the `f64` error of `τ`.
//! * **Trigonometry:** `sin`, `cos`, `tan` and `sin_cos` on `f64` angular quantities convert to radians and call the
//!   corresponding intrinsic (or `libm` without `std`).
//! * **Wrapping helpers:** `wrap_pos` into `[0, FULL_TURN)` and `wrap_signed` into `(-HALF_TURN, HALF_TURN]`.
//!
//! ```rust
//! use qunit_core::angle::{Degrees, Radian, Radians};
//!
//! let angle: Degrees = Degrees::new(90.0);
//! let r: Radians = angle.to::<Radian>();
//! assert!((r.value() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert!((angle.sin() - 1.0).abs() < 1e-12);
//! assert_eq!(Degrees::new(370.0).wrap_signed().value(), 10.0);
//! ```

use crate::{dimension_trait, impl_unit_conversions, Conversion, Dimension, Quantity, Ratio};
use core::f64::consts::TAU;
use qunit_derive::Unit;

/// Dimension tag for plane angles.
pub enum Angle {}
impl Dimension for Angle {}

dimension_trait! {
    /// Marker trait for any [`Unit`](crate::Unit) whose dimension is [`Angle`].
    pub trait AngularUnit for Angle
}

#[inline]
fn rem_euclid(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.rem_euclid(modulus)
    }
    #[cfg(not(feature = "std"))]
    {
        let r = libm::fmod(x, modulus);
        if r < 0.0 {
            r + modulus
        } else {
            r
        }
    }
}

/// Radian (canonical).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", dimension = Angle, ratio = 1)]
pub struct Radian;
/// A quantity measured in radians.
pub type Radians<T = f64> = Quantity<Radian, T>;
/// One radian.
pub const RAD: Radians = Radians::new(1.0);

/// Milliradian (`1/1000` radian).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mrad", of = Radian, ratio = 1 / 1000)]
pub struct Milliradian;
/// A quantity measured in milliradians.
pub type Milliradians<T = f64> = Quantity<Milliradian, T>;
/// One milliradian.
pub const MRAD: Milliradians = Milliradians::new(1.0);

/// Turn (one full revolution, `τ` radians).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "tr", of = Radian, ratio = Ratio::approximate(TAU))]
pub struct Turn;
/// A quantity measured in turns.
pub type Turns<T = f64> = Quantity<Turn, T>;
/// One turn.
pub const TURN: Turns = Turns::new(1.0);

/// Degree (`1/360` turn).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "deg", dimension = Angle, of = Turn, ratio = 1 / 360)]
pub struct Degree;
/// A quantity measured in degrees.
pub type Degrees<T = f64> = Quantity<Degree, T>;
/// One degree.
pub const DEG: Degrees = Degrees::new(1.0);

/// Arcminute (`1/60` degree).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "arcmin", of = Degree, ratio = 1 / 60)]
pub struct Arcminute;
/// A quantity measured in arcminutes.
pub type Arcminutes<T = f64> = Quantity<Arcminute, T>;
/// One arcminute.
pub const ARCMIN: Arcminutes = Arcminutes::new(1.0);

/// Arcsecond (`1/60` arcminute).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "arcsec", of = Arcminute, ratio = 1 / 60)]
pub struct Arcsecond;
/// A quantity measured in arcseconds.
pub type Arcseconds<T = f64> = Quantity<Arcsecond, T>;
/// One arcsecond.
pub const ARCSEC: Arcseconds = Arcseconds::new(1.0);

/// Gradian (`1/400` turn).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gon", name = "gradian", of = Turn, ratio = 1 / 400)]
pub struct Gradian;
/// A quantity measured in gradians.
pub type Gradians<T = f64> = Quantity<Gradian, T>;
/// One gradian.
pub const GON: Gradians = Gradians::new(1.0);

impl_unit_conversions!(Radian, Milliradian, Turn, Degree, Arcminute, Arcsecond, Gradian);

impl<U: AngularUnit> Quantity<U> {
    /// One full revolution expressed in this unit.
    pub const FULL_TURN: Self = Self::new(Conversion::<Turn, U>::FACTOR.to_f64());
    /// Half a revolution expressed in this unit.
    pub const HALF_TURN: Self = Self::new(Conversion::<Turn, U>::FACTOR.to_f64() * 0.5);

    #[inline]
    fn radians(self) -> f64 {
        self.to::<Radian>().value()
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.radians().sin()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sin(self.radians())
        }
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.radians().cos()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::cos(self.radians())
        }
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.radians().tan()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::tan(self.radians())
        }
    }

    /// Simultaneously compute sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        #[cfg(feature = "std")]
        {
            self.radians().sin_cos()
        }
        #[cfg(not(feature = "std"))]
        {
            let x = self.radians();
            (libm::sin(x), libm::cos(x))
        }
    }

    /// Wrap into `[0, FULL_TURN)` using the Euclidean remainder.
    #[inline]
    pub fn wrap_pos(self) -> Self {
        Self::new(rem_euclid(self.value(), Self::FULL_TURN.value()))
    }

    /// Wrap into `(-HALF_TURN, HALF_TURN]`.
    ///
    /// Upper bound inclusive, lower bound exclusive.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let full = Self::FULL_TURN.value();
        let half = Self::HALF_TURN.value();
        let y = rem_euclid(self.value() + half, full) - half;
        Self::new(if y <= -half { y + full } else { y })
    }

    /// Signed smallest angular separation in `(-HALF_TURN, HALF_TURN]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }
}

impl Degrees {
    /// Construct from **DMS** components (`deg`, `min`, `sec`).
    ///
    /// Sign is taken from `deg`; the magnitude of `min` and `sec` is always added.
    ///
    /// ```rust
    /// use qunit_core::angle::Degrees;
    /// let lat = Degrees::from_dms(-33, 52, 0.0);
    /// assert!(lat.value() < 0.0);
    /// ```
    pub const fn from_dms(deg: i32, min: u32, sec: f64) -> Self {
        let sign = if deg < 0 { -1.0 } else { 1.0 };
        let total = deg.unsigned_abs() as f64 + min as f64 / 60.0 + sec / 3600.0;
        Self::new(sign * total)
    }
}
