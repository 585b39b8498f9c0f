//! Unit types and traits.

use crate::dimension::{Dimension, Dimensionless, DivDim, MulDim};
use crate::ratio::Ratio;
use crate::scalar::Scalar;
use crate::Quantity;
use core::fmt::{Debug, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the exact conversion factor from this unit to the *canonical scaling unit* of the same dimension.
///   Example: if seconds are canonical (`Second::RATIO == Ratio::ONE`), then hours use `Hour::RATIO == 3600`
///   because `1 hr = 3600 s`.
///
/// * `SYMBOL` is the abbreviation used for text rendering and parsing (e.g. `"s"` or `"hr"`).
///
/// * `NAME` and `PLURAL` are the human-readable names (`"hour"`, `"hours"`).
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// Units are normally declared with `#[derive(Unit)]` rather than by hand.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in units are unit structs with no fields).
/// - `RATIO` should be non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-canonical conversion factor.
    const RATIO: Ratio;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol, shown by [`core::fmt::Display`] and accepted by [`core::str::FromStr`].
    const SYMBOL: &'static str;

    /// Singular name.
    const NAME: &'static str;

    /// Plural name.
    const PLURAL: &'static str;

    /// `true` for units built from other units (`Per`, `Prod`), whose symbol is composed at format time.
    const COMPOUND: bool = false;

    /// Writes the unit symbol.
    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::SYMBOL)
    }

    /// Returns `true` if `text` is this unit's symbol.
    fn matches_symbol(text: &str) -> bool {
        text == Self::SYMBOL
    }
}

/// Exact conversion factor between two units of the same dimension.
///
/// `Conversion::<S, D>::FACTOR` is `S::RATIO / D::RATIO`, evaluated at compile time for each pair of units that is
/// actually converted. Requesting it for units of different dimensions does not type-check:
///
/// ```rust
/// use qunit_core::{Conversion, Ratio};
/// use qunit_core::time::{Day, Week};
///
/// assert_eq!(Conversion::<Week, Day>::FACTOR, Ratio::integer(7));
/// ```
///
/// ```compile_fail
/// use qunit_core::Conversion;
/// use qunit_core::length::Meter;
/// use qunit_core::time::Second;
///
/// let _ = Conversion::<Second, Meter>::FACTOR;
/// ```
pub struct Conversion<S, D>(PhantomData<(S, D)>);

impl<S: Unit, D: Unit> Conversion<S, D> {
    pub(crate) const RAW: Ratio = S::RATIO.div(D::RATIO);
}

impl<S: Unit, D: Unit<Dim = S::Dim>> Conversion<S, D> {
    /// Factor such that `value_in_d = value_in_s * FACTOR`.
    pub const FACTOR: Ratio = Self::RAW;

    /// `true` when both units have the same scale, however they were defined.
    pub const IDENTITY: bool = Self::RAW.is_one();
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D` and carries both the
/// dimensional information and the scaling ratio between the
/// constituent units. It is generic over any numerator and
/// denominator units, which allows implementing arithmetic
/// generically for all pairs without bespoke macros.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const RATIO: Ratio = N::RATIO.div(D::RATIO);
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";
    const PLURAL: &'static str = "";
    const COMPOUND: bool = true;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        N::fmt_symbol(f)?;
        f.write_str("/")?;
        D::fmt_symbol(f)
    }

    fn matches_symbol(text: &str) -> bool {
        // Nested units are written inline (`m/s/s`), so any separator may be the outer one.
        text.match_indices('/').any(|(at, _)| N::matches_symbol(&text[..at]) && D::matches_symbol(&text[at + 1..]))
    }
}

/// Unit representing the product of two other units.
///
/// `Prod<A, B>` corresponds to `A · B`; its ratio is the product of both ratios and its dimension is
/// [`MulDim`]. It renders as `A*B`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const RATIO: Ratio = A::RATIO.mul(B::RATIO);
    type Dim = MulDim<A::Dim, B::Dim>;
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";
    const PLURAL: &'static str = "";
    const COMPOUND: bool = true;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        A::fmt_symbol(f)?;
        f.write_str("*")?;
        B::fmt_symbol(f)
    }

    fn matches_symbol(text: &str) -> bool {
        text.match_indices('*').any(|(at, _)| A::matches_symbol(&text[..at]) && B::matches_symbol(&text[at + 1..]))
    }
}

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` represents a dimensionless unit with a conversion ratio of 1
/// and an empty symbol. It is used to model the result of simplifying same-unit
/// ratios (e.g., `Meters / Meters`) into a plain "number-like" `Quantity<Unitless>`.
///
/// Unlike a type alias to `f64`, this is a proper zero-sized type, which ensures
/// that only explicitly constructed `Quantity<Unitless>` values are treated as
/// dimensionless, not bare `f64` primitives.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const RATIO: Ratio = Ratio::ONE;
    type Dim = Dimensionless;
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";
    const PLURAL: &'static str = "";
}

/// Trait for simplifying composite unit types.
///
/// This allows reducing complex unit expressions to simpler forms,
/// such as `Per<U, U>` to `Unitless` or `Prod<Per<N, D>, D>` to `N`.
/// The numeric value is unchanged because both forms have the same ratio.
pub trait Simplify {
    /// The simplified unit type.
    type Out: Unit;
    /// The numeric representation.
    type Repr: Scalar;
    /// Convert this quantity to its simplified unit.
    fn simplify(self) -> Quantity<Self::Out, Self::Repr>;
}

impl<U: Unit, T: Scalar> Simplify for Quantity<Per<U, U>, T> {
    type Out = Unitless;
    type Repr = T;
    /// ```rust
    /// use qunit_core::length::Meters;
    /// use qunit_core::{Quantity, Simplify, Unitless};
    ///
    /// let ratio = Meters::new(1.0) / Meters::new(2.0);
    /// let unitless: Quantity<Unitless> = ratio.simplify();
    /// assert!((unitless.value() - 0.5).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Quantity<Unitless, T> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, T: Scalar> Simplify for Quantity<Per<N, Per<N, D>>, T> {
    type Out = D;
    type Repr = T;
    fn simplify(self) -> Quantity<D, T> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, T: Scalar> Simplify for Quantity<Prod<Per<N, D>, D>, T> {
    type Out = N;
    type Repr = T;
    /// ```rust
    /// use qunit_core::length::Meters;
    /// use qunit_core::time::Seconds;
    /// use qunit_core::Simplify;
    ///
    /// let speed = Meters::new(10.0) / Seconds::new(2.0);
    /// let distance: Meters = (speed * Seconds::new(3.0)).simplify();
    /// assert_eq!(distance.value(), 15.0);
    /// ```
    fn simplify(self) -> Quantity<N, T> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, T: Scalar> Simplify for Quantity<Prod<D, Per<N, D>>, T> {
    type Out = N;
    type Repr = T;
    fn simplify(self) -> Quantity<N, T> {
        Quantity::new(self.value())
    }
}

impl<A: Unit, B: Unit, T: Scalar> Simplify for Quantity<Per<Prod<A, B>, B>, T> {
    type Out = A;
    type Repr = T;
    fn simplify(self) -> Quantity<A, T> {
        Quantity::new(self.value())
    }
}
