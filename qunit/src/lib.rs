//! Compile-time checked units of measurement with exact conversion factors.
//!
//! `qunit` is the user-facing crate in this workspace. It re-exports the full API from `qunit-core` plus every
//! predefined unit (time, length, mass, angle, velocity, frequency).
//!
//! A value is always a `Quantity<U, T>`, where `U` is a zero-sized type describing the unit and `T` is the numeric
//! representation (`f64` unless stated otherwise). Units live at compile time; a quantity occupies exactly the space
//! of its `T`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`).
//! - Keeps conversion factors exact: every unit carries a rational [`Ratio`] to its canonical unit, and factors
//!   derived along different chains compare equal at compile time.
//! - Works for integer representations as well as floats (`5_i32.mins()`).
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra (e.g. `m^2 * s^-1`); only the [`Per`] and [`Prod`] forms are modeled.
//! - Affine units (temperature scales with offsets).
//! - Locale-aware formatting.
//!
//! # Quick start
//!
//! ```rust
//! use qunit::{Hours, Minute, Second};
//!
//! let h = Hours::new(1.0);
//! assert_eq!(h.to::<Minute>().value(), 60.0);
//! assert_eq!(h.to::<Minute>().to::<Second>().value(), 3600.0);
//! ```
//!
//! Literal suffixes and text round-trips:
//!
//! ```rust
//! use qunit::*;
//!
//! assert_eq!(5_i32.mins(), Minutes::new(5));
//! let d: Days = "2 d".parse()?;
//! assert_eq!(d.to_string(), "2 d");
//! # Ok::<(), ParseQuantityError>(())
//! ```
//!
//! Compose derived units (velocity = length / time):
//!
//! ```rust
//! use qunit::{Kilometer, Kilometers, Second, Seconds};
//! use qunit::velocity::Velocity;
//!
//! let v: Velocity<Kilometer, Second> = Kilometers::new(1_000.0) / Seconds::new(100.0);
//! assert_eq!(v.value(), 10.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use qunit::{Kilometers, Seconds};
//!
//! let _ = Kilometers::new(1.0) + Seconds::new(1.0); // cannot add length and time
//! ```
//!
//! ```compile_fail
//! use qunit::{Meter, Seconds};
//!
//! let _ = Seconds::new(1.0).to::<Meter>(); // no conversion across dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `qunit::time` (seconds and their metric prefixes, minutes, hours, days, weeks, years, ...)
//! - `qunit::length` (metres and their metric prefixes, imperial units, astronomical units, ...)
//! - `qunit::mass` (grams and their metric prefixes, tonnes, pounds, ounces)
//! - `qunit::angle` (radians, degrees, arcminutes, wrapping/trigonometry helpers)
//! - `qunit::velocity` (`Length / Time` aliases)
//! - `qunit::frequency` (`Angle / Time` aliases)
//! - `qunit::unitless` (dimensionless quantities)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `qunit-core`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! qunit = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Conversions and arithmetic do not return `Result`. Floats follow IEEE-754. Integer representations truncate toward
//! zero when a factor is fractional, and a conversion that leaves the integer's range behaves like native overflow:
//! it panics with debug assertions on and wraps otherwise. Parsing returns [`ParseQuantityError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use qunit_core::*;

/// Derive macro used by `qunit-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit`, `crate::Ratio` and `crate::Quantity`, so it is intended for use
/// inside `qunit-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use qunit_derive::Unit;

pub use qunit_core::units::angle;
pub use qunit_core::units::frequency;
pub use qunit_core::units::length;
pub use qunit_core::units::mass;
pub use qunit_core::units::time;
pub use qunit_core::units::unitless;
pub use qunit_core::units::velocity;

pub use qunit_core::units::angle::*;
pub use qunit_core::units::frequency::*;
pub use qunit_core::units::length::*;
pub use qunit_core::units::mass::*;
pub use qunit_core::units::time::*;
pub use qunit_core::units::velocity::*;
