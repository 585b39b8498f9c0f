//! Dimension types and traits.

use core::any::TypeId;
use core::marker::PhantomData;

/// Marker trait for **dimensions** (Length, Time, Mass …).
///
/// A *dimension* is the category that distinguishes a metre from a second. Dimensions carry no data; their identity
/// is the type itself. You usually model each dimension as an empty enum:
///
/// ```rust
/// use qunit_core::Dimension;
/// #[derive(Debug)]
/// pub enum Length {}
/// impl Dimension for Length {}
/// ```
pub trait Dimension: 'static {}

/// Dimension formed by dividing one [`Dimension`] by another.
///
/// This is used to model composite dimensions such as `Length/Time` for velocities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivDim<N: Dimension, D: Dimension>(PhantomData<(N, D)>);
impl<N: Dimension, D: Dimension> Dimension for DivDim<N, D> {}

/// Dimension formed by multiplying two [`Dimension`]s.
///
/// `MulDim<A, B>` and `MulDim<B, A>` are distinct types: products are not reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulDim<A: Dimension, B: Dimension>(PhantomData<(A, B)>);
impl<A: Dimension, B: Dimension> Dimension for MulDim<A, B> {}

/// Dimension for dimensionless quantities.
pub enum Dimensionless {}
impl Dimension for Dimensionless {}

/// Returns `true` if both units share the same dimension tag.
///
/// This is the value-level form of the `U: Unit<Dim = D>` bound, for generic code that needs to branch on it.
///
/// ```rust
/// use qunit_core::same_dimension;
/// use qunit_core::length::Meter;
/// use qunit_core::time::{Hour, Second};
///
/// assert!(same_dimension::<Second, Hour>());
/// assert!(!same_dimension::<Second, Meter>());
/// ```
pub fn same_dimension<A: crate::Unit, B: crate::Unit>() -> bool {
    TypeId::of::<A::Dim>() == TypeId::of::<B::Dim>()
}
