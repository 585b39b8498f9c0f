//! Angular frequency unit aliases (`Angle / Time`).
//!
//! ```rust
//! use qunit_core::angle::{Degree, Radian};
//! use qunit_core::time::Day;
//! use qunit_core::frequency::Frequency;
//!
//! let f: Frequency<Degree, Day> = Frequency::new(180.0);
//! let f_rad: Frequency<Radian, Day> = f.to();
//! assert!((f_rad.value() - core::f64::consts::PI).abs() < 1e-12);
//! ```

use crate::units::angle::Angle;
use crate::units::time::Time;
use crate::{dimension_trait, DivDim, Per, Quantity};

/// Dimension alias for angular frequency (`Angle / Time`).
pub type FrequencyDim = DivDim<Angle, Time>;

dimension_trait! {
    /// Marker trait for any unit with frequency dimension (`Angle / Time`).
    pub trait FrequencyUnit for FrequencyDim
}

/// A frequency quantity parameterized by angular and time units.
pub type Frequency<N, D, T = f64> = Quantity<Per<N, D>, T>;
