//! Quantity type and its implementations.

use crate::ratio::Ratio;
use crate::scalar::Scalar;
use crate::unit::{Conversion, Per, Prod, Unit};
use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter, Write};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

/// A quantity with a specific unit.
///
/// `Quantity<U, T>` wraps a value of the numeric type `T` (by default `f64`) together with phantom type information
/// about its unit `U`. This enables compile-time dimensional analysis while maintaining zero runtime cost: the
/// quantity has exactly the size and layout-relevant content of `T`.
///
/// # Examples
///
/// ```rust
/// use qunit_core::{Dimension, Quantity, Ratio, Unit};
///
/// pub enum Length {}
/// impl Dimension for Length {}
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub enum Meter {}
/// impl Unit for Meter {
///     const RATIO: Ratio = Ratio::ONE;
///     type Dim = Length;
///     const SYMBOL: &'static str = "m";
///     const NAME: &'static str = "meter";
///     const PLURAL: &'static str = "meters";
/// }
///
/// let x = Quantity::<Meter>::new(5.0);
/// let y = Quantity::<Meter>::new(3.0);
/// let sum = x + y;
/// assert_eq!(sum.value(), 8.0);
/// ```
///
/// Quantities of different dimensions cannot be combined:
///
/// ```compile_fail
/// use qunit_core::length::Meters;
/// use qunit_core::time::Seconds;
///
/// let _ = Meters::new(1.0) + Seconds::new(1.0);
/// ```
///
/// ```compile_fail
/// use qunit_core::length::Meters;
/// use qunit_core::time::Seconds;
///
/// let _ = Meters::new(1.0) < Seconds::new(1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, T: Scalar = f64>(T, PhantomData<U>);

impl<U: Unit, T: Scalar> Quantity<U, T> {
    /// The zero quantity.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// One of this unit.
    pub const ONE: Self = Self::new(T::ONE);

    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use qunit_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    ///
    /// ```rust
    /// use qunit_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// The factor is the exact [`Ratio`] `U::RATIO / V::RATIO`, computed at compile time; the only rounding is the
    /// single multiplication of the stored value.
    ///
    /// ```rust
    /// use qunit_core::time::{Hours, Minute, Second};
    ///
    /// let h = Hours::new(1.0);
    /// assert_eq!(h.to::<Minute>().value(), 60.0);
    /// assert_eq!(h.to::<Second>().value(), 3600.0);
    /// ```
    #[inline]
    pub fn to<V: Unit<Dim = U::Dim>>(self) -> Quantity<V, T> {
        Quantity::new(self.0.rescale(Conversion::<U, V>::FACTOR))
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use qunit_core::angle::Degrees;
    /// let a = Degrees::new(-10.0);
    /// assert_eq!(a.abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.magnitude())
    }

    /// Returns the minimum of this quantity and another.
    ///
    /// ```rust
    /// use qunit_core::length::Meters;
    /// let a = Meters::new(3.0);
    /// let b = Meters::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Singular name of the unit (`"hour"`).
    #[inline]
    pub const fn name(&self) -> &'static str {
        U::NAME
    }

    /// Plural name of the unit (`"hours"`).
    #[inline]
    pub const fn plural_name(&self) -> &'static str {
        U::PLURAL
    }

    /// Unit abbreviation used in text form (`"hr"`).
    #[inline]
    pub const fn abbreviation(&self) -> &'static str {
        U::SYMBOL
    }

    /// Scale factor of this quantity's unit relative to the canonical unit of its dimension.
    #[inline]
    pub const fn ratio(&self) -> Ratio {
        U::RATIO
    }
}

impl<U: Unit> Quantity<U, f64> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use qunit_core::length::Meters;
    /// assert!(Meters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Const addition of two quantities of the same unit.
    ///
    /// ```rust
    /// use qunit_core::length::Meters;
    /// const A: Meters = Meters::new(1.0).add(Meters::new(2.0));
    /// assert_eq!(A.value(), 3.0);
    /// ```
    #[inline]
    pub const fn add(&self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }

    /// Const subtraction of two quantities of the same unit.
    ///
    /// ```rust
    /// use qunit_core::length::Meters;
    /// let a = Meters::new(5.0);
    /// let b = Meters::new(2.0);
    /// assert_eq!(a.sub(b).value(), 3.0);
    /// ```
    #[inline]
    pub const fn sub(&self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension arithmetic (right operand converted to the left operand's unit)
// ─────────────────────────────────────────────────────────────────────────────

/// Adds a quantity of any unit of the same dimension; the result keeps the left operand's unit.
///
/// The right operand is converted with [`Quantity::to`] first, so for integer representations any part of it finer
/// than the left unit is truncated. Convert to the finer unit beforehand to keep it:
///
/// ```rust
/// use qunit_core::time::{Minutes, Second, Seconds};
///
/// assert_eq!((Minutes::new(1_i32) + Seconds::new(30_i32)).value(), 1);
/// assert_eq!((Minutes::new(1_i32).to::<Second>() + Seconds::new(30_i32)).value(), 90);
/// assert_eq!((Minutes::new(1.0) + Seconds::new(30.0)).value(), 1.5);
/// ```
impl<U: Unit, V: Unit<Dim = U::Dim>, T: Scalar> Add<Quantity<V, T>> for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<V, T>) -> Self {
        Self::new(self.0 + rhs.0.rescale(Conversion::<V, U>::FACTOR))
    }
}

impl<U: Unit, V: Unit<Dim = U::Dim>, T: Scalar> AddAssign<Quantity<V, T>> for Quantity<U, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V, T>) {
        self.0 += rhs.0.rescale(Conversion::<V, U>::FACTOR);
    }
}

/// Subtracts a quantity of any unit of the same dimension; the result keeps the left operand's unit.
///
/// As with [`Add`], integer representations truncate the right operand to the left unit before subtracting.
impl<U: Unit, V: Unit<Dim = U::Dim>, T: Scalar> Sub<Quantity<V, T>> for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<V, T>) -> Self {
        Self::new(self.0 - rhs.0.rescale(Conversion::<V, U>::FACTOR))
    }
}

impl<U: Unit, V: Unit<Dim = U::Dim>, T: Scalar> SubAssign<Quantity<V, T>> for Quantity<U, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V, T>) {
        self.0 -= rhs.0.rescale(Conversion::<V, U>::FACTOR);
    }
}

/// Compares on a common scale: exactly for integer representations, within one epsilon for floats.
///
/// ```rust
/// use qunit_core::time::{Minutes, Seconds};
///
/// assert!(Minutes::new(1_i32) != Seconds::new(90_i32));
/// assert!(Seconds::new(90_i32) != Minutes::new(1_i32));
/// assert!(Minutes::new(1_i32) < Seconds::new(90_i32));
/// ```
impl<U: Unit, V: Unit<Dim = U::Dim>, T: Scalar> PartialEq<Quantity<V, T>> for Quantity<U, T> {
    #[inline]
    fn eq(&self, other: &Quantity<V, T>) -> bool {
        self.0.cmp_scaled(other.0, Conversion::<V, U>::FACTOR) == Some(Ordering::Equal)
    }
}

impl<U: Unit, V: Unit<Dim = U::Dim>, T: Scalar> PartialOrd<Quantity<V, T>> for Quantity<U, T> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<V, T>) -> Option<Ordering> {
        self.0.cmp_scaled(other.0, Conversion::<V, U>::FACTOR)
    }
}

impl<U: Unit, T: Scalar + Neg<Output = T>> Neg for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit, T: Scalar> Default for Quantity<U, T> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit, T: Scalar> Sum for Quantity<U, T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| Self::new(acc.0 + q.0))
    }
}

impl<U: Unit, T: Scalar> From<T> for Quantity<U, T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cross-dimension arithmetic: compound units
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, V: Unit, T: Scalar> Mul<Quantity<V, T>> for Quantity<U, T> {
    type Output = Quantity<Prod<U, V>, T>;
    #[inline]
    fn mul(self, rhs: Quantity<V, T>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<U: Unit, V: Unit, T: Scalar> Div<Quantity<V, T>> for Quantity<U, T> {
    type Output = Quantity<Per<U, V>, T>;
    #[inline]
    fn div(self, rhs: Quantity<V, T>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scaling by bare numbers
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {$(
        impl<U: Unit> Mul<$t> for Quantity<U, $t> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $t) -> Self {
                Self::new(self.0 * rhs)
            }
        }

        impl<U: Unit> Mul<Quantity<U, $t>> for $t {
            type Output = Quantity<U, $t>;
            #[inline]
            fn mul(self, rhs: Quantity<U, $t>) -> Self::Output {
                rhs * self
            }
        }

        impl<U: Unit> MulAssign<$t> for Quantity<U, $t> {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                self.0 *= rhs;
            }
        }

        impl<U: Unit> Div<$t> for Quantity<U, $t> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $t) -> Self {
                Self::new(self.0 / rhs)
            }
        }

        impl<U: Unit> DivAssign<$t> for Quantity<U, $t> {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                self.0 /= rhs;
            }
        }

        impl<U: Unit> Rem<$t> for Quantity<U, $t> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: $t) -> Self {
                Self::new(self.0 % rhs)
            }
        }

        impl<U: Unit> PartialEq<$t> for Quantity<U, $t> {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.0 == *other
            }
        }
    )*};
}

impl_scalar_ops!(f64, f32, i32, i64, u32, u64);

// ─────────────────────────────────────────────────────────────────────────────
// Text rendering
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, T: Scalar> Display for Quantity<U, T> {
    /// Renders `"<value> <symbol>"`; format options (precision, width) apply to the value.
    ///
    /// ```rust
    /// use qunit_core::time::Hours;
    /// assert_eq!(format!("{}", Hours::new(1.5)), "1.5 hr");
    /// assert_eq!(format!("{:.2}", Hours::new(1.0)), "1.00 hr");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)?;
        if U::COMPOUND || !U::SYMBOL.is_empty() {
            f.write_char(' ')?;
            U::fmt_symbol(f)?;
        }
        Ok(())
    }
}
