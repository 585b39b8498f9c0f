//! Dimensionless quantities.
//!
//! A ratio of two quantities in the *same* unit carries no dimension; it converts into `Quantity<Unitless>`, which
//! renders and parses as a bare number.
//!
//! ```rust
//! use qunit_core::length::Kilometers;
//! use qunit_core::{Quantity, Unitless};
//!
//! let ratio = Kilometers::new(3.0) / Kilometers::new(4.0);
//! let u: Quantity<Unitless> = ratio.into();
//! assert_eq!(u.value(), 0.75);
//! assert_eq!(u.to_string(), "0.75");
//! ```

use crate::{Per, Quantity, Scalar, Unit, Unitless};

impl<U: Unit, T: Scalar> From<Quantity<Per<U, U>, T>> for Quantity<Unitless, T> {
    fn from(ratio: Quantity<Per<U, U>, T>) -> Self {
        Self::new(ratio.value())
    }
}
