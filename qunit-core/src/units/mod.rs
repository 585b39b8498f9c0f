//! Predefined unit modules grouped by dimension.
//!
//! Built-in units live next to the core types so that conversions, formatting and parsing work out of the box without
//! downstream crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`time`]: time units (SI second is the canonical scaling unit).
//! - [`length`]: length units (SI metre is the canonical scaling unit) plus astronomical distances.
//! - [`mass`]: mass units (gram is the canonical scaling unit).
//! - [`angle`]: angle units plus wrapping and trig helpers.
//! - [`velocity`]: velocity aliases (`Length / Time`) built from [`length`] and [`time`].
//! - [`frequency`]: angular frequency aliases (`Angle / Time`) built from [`angle`] and [`time`].
//! - [`unitless`]: conversions into dimensionless quantities.

pub mod angle;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod time;
pub mod unitless;
pub mod velocity;
