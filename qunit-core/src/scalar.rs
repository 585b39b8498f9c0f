//! Numeric representations a quantity can be stored in.

use crate::ratio::Ratio;
use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, Sub, SubAssign};
use core::str::FromStr;

/// Numeric type backing a [`Quantity`](crate::Quantity).
///
/// Implemented for `f32`, `f64`, `i32`, `i64`, `u32` and `u64`. The trait only adds what the unit machinery needs on
/// top of ordinary arithmetic:
///
/// - [`Scalar::rescale`] applies an exact conversion [`Ratio`];
/// - [`Scalar::approx_eq`] is the equality used when comparing quantities.
///
/// Floating types compare within one epsilon of relative error (or below the smallest normal value in absolute
/// terms), so values that only differ by conversion rounding are equal. Integer types compare exactly, by
/// cross-multiplication, and rescale with truncating division.
///
/// Integer rescaling that leaves the type's range behaves like the type's own arithmetic overflow: it panics when
/// debug assertions are enabled and wraps otherwise.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Multiplies `self` by `factor`.
    fn rescale(self, factor: Ratio) -> Self;

    /// Equality up to the representation's precision.
    fn approx_eq(self, other: Self) -> bool;

    /// Compares `self` with `other * factor` without losing precision to the conversion.
    ///
    /// Floats compare within [`Scalar::approx_eq`] tolerance; integers compare exactly.
    fn cmp_scaled(self, other: Self, factor: Ratio) -> Option<Ordering>;

    /// Absolute value (identity for unsigned types).
    fn magnitude(self) -> Self;
}

#[inline]
fn fabs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fabs(x)
    }
}

#[inline]
fn fabsf(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fabsf(x)
    }
}

macro_rules! impl_float_scalar {
    ($($t:ty => $abs:ident),* $(,)?) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn rescale(self, factor: Ratio) -> Self {
                if factor.is_one() {
                    self
                } else if factor.den() == 1 {
                    self * factor.num() as $t
                } else if factor.num() == 1 {
                    self / factor.den() as $t
                } else {
                    self * factor.num() as $t / factor.den() as $t
                }
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                if self == other {
                    return true;
                }
                let diff = $abs(self - other);
                diff <= <$t>::EPSILON * $abs(self + other) || diff < <$t>::MIN_POSITIVE
            }

            #[inline]
            fn cmp_scaled(self, other: Self, factor: Ratio) -> Option<Ordering> {
                let rhs = other.rescale(factor);
                if self.approx_eq(rhs) {
                    Some(Ordering::Equal)
                } else {
                    self.partial_cmp(&rhs)
                }
            }

            #[inline]
            fn magnitude(self) -> Self {
                $abs(self)
            }
        }
    )*};
}

/// Result of an integer rescale that left the target range.
#[inline]
#[track_caller]
fn overflowed<T>(wrapped: T) -> T {
    if cfg!(debug_assertions) {
        panic!("attempt to rescale with overflow");
    }
    wrapped
}

macro_rules! impl_int_scalar {
    (signed: $($s:ty),*; unsigned: $($u:ty),* $(,)?) => {
        $(impl_int_scalar!(@impl $s, |x: $s| x.wrapping_abs());)*
        $(impl_int_scalar!(@impl $u, |x: $u| x);)*
    };
    (@impl $t:ty, $abs:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            #[track_caller]
            fn rescale(self, factor: Ratio) -> Self {
                if factor.is_one() {
                    return self;
                }
                match (self as i128).checked_mul(factor.num()) {
                    Some(scaled) => {
                        let scaled = scaled / factor.den();
                        match <$t>::try_from(scaled) {
                            Ok(value) => value,
                            Err(_) => overflowed(scaled as $t),
                        }
                    }
                    None => overflowed(((self as i128).wrapping_mul(factor.num()) / factor.den()) as $t),
                }
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn cmp_scaled(self, other: Self, factor: Ratio) -> Option<Ordering> {
                // self ? other * num / den  <=>  self * den ? other * num, with den > 0
                match ((self as i128).checked_mul(factor.den()), (other as i128).checked_mul(factor.num())) {
                    (Some(lhs), Some(rhs)) => Some(lhs.cmp(&rhs)),
                    _ => (self as f64).partial_cmp(&(other as f64 * factor.to_f64())),
                }
            }

            #[inline]
            fn magnitude(self) -> Self {
                ($abs)(self)
            }
        }
    };
}

impl_float_scalar!(f64 => fabs, f32 => fabsf);
impl_int_scalar!(signed: i32, i64; unsigned: u32, u64);
