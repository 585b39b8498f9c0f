//! Text parsing for quantities.
//!
//! [`Quantity`] implements [`FromStr`] for every unit, accepting exactly what its `Display` impl produces: a number,
//! optional whitespace and the unit symbol (`"2 d"`, `"2d"`, `"9.81 m/s/s"`). Dimensionless quantities are parsed
//! from a bare number.

use crate::quantity::Quantity;
use crate::scalar::Scalar;
use crate::unit::Unit;
use core::fmt::{self, Display, Formatter};
use core::marker::PhantomData;
use core::str::FromStr;
use thiserror::Error;

/// Error returned when parsing a [`Quantity`] from text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseQuantityError {
    /// The input was empty or only whitespace.
    #[error("cannot parse a quantity from an empty string")]
    Empty,
    /// A number was found but no unit symbol followed it.
    #[error("missing unit symbol after the value")]
    MissingUnit,
    /// The numeric part is not valid for the quantity's representation.
    #[error("invalid numeric value")]
    InvalidNumber,
    /// The unit symbol is not the one of the target unit.
    #[error("unit symbol does not match the target unit")]
    UnitMismatch,
}

/// Displays the symbol of `U`, composing it for compound units.
struct Symbol<U>(PhantomData<U>);

impl<U: Unit> Display for Symbol<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        U::fmt_symbol(f)
    }
}

/// Splits `text` into its numeric part and its unit part, if a unit part can be recognised.
fn split_unit<U: Unit>(text: &str) -> Option<(&str, &str)> {
    if let Some(at) = text.rfind(char::is_whitespace) {
        let (number, rest) = text.split_at(at);
        return Some((number.trim_end(), rest.trim_start()));
    }
    if !U::COMPOUND {
        return text.strip_suffix(U::SYMBOL).map(|number| (number, U::SYMBOL));
    }
    text.char_indices()
        .skip(1)
        .map(|(at, _)| text.split_at(at))
        .find(|(_, symbol)| U::matches_symbol(symbol))
}

/// Returns `true` if `number` is a valid number followed by letters, as left by stripping a shorter symbol that
/// happens to end another one (`"5ms"` read as seconds leaves `"5m"`).
fn glued_symbol<T: Scalar>(number: &str) -> bool {
    let digits = number.trim_end_matches(char::is_alphabetic);
    digits.len() < number.len() && !digits.is_empty() && digits.parse::<T>().is_ok()
}

impl<U: Unit, T: Scalar> FromStr for Quantity<U, T> {
    type Err = ParseQuantityError;

    /// ```rust
    /// use qunit_core::time::Days;
    ///
    /// let d: Days = "2 d".parse().unwrap();
    /// assert_eq!(d, Days::new(2.0));
    /// assert!("2 hr".parse::<Days>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseQuantityError::Empty);
        }

        let unitless = !U::COMPOUND && U::SYMBOL.is_empty();
        let (number, symbol) = if unitless {
            (text, "")
        } else {
            match split_unit::<U>(text) {
                Some(parts) => parts,
                None if text.parse::<T>().is_ok() => {
                    log::trace!("no unit in {:?}, expected `{}`", s, Symbol::<U>(PhantomData));
                    return Err(ParseQuantityError::MissingUnit);
                }
                None => {
                    log::trace!("no `{}` suffix in {:?}", Symbol::<U>(PhantomData), s);
                    return Err(ParseQuantityError::UnitMismatch);
                }
            }
        };

        if !unitless && !U::matches_symbol(symbol) {
            log::trace!("unit {:?} in {:?} is not `{}`", symbol, s, Symbol::<U>(PhantomData));
            return Err(ParseQuantityError::UnitMismatch);
        }

        match number.parse::<T>() {
            Ok(value) => Ok(Quantity::new(value)),
            Err(_) if glued_symbol::<T>(number) => {
                log::trace!("unit in {:?} is not `{}`", s, Symbol::<U>(PhantomData));
                Err(ParseQuantityError::UnitMismatch)
            }
            Err(_) => {
                log::trace!("invalid number {:?} in {:?}", number, s);
                Err(ParseQuantityError::InvalidNumber)
            }
        }
    }
}
