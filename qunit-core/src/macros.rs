//! Declarative macros shared by the unit modules.

/// Declares a dimension predicate trait: `TimeUnit` is implemented by exactly the units whose dimension is `Time`.
///
/// ```rust
/// use qunit_core::time::{Hour, TimeUnit};
///
/// fn takes_time<U: TimeUnit>() -> &'static str {
///     U::SYMBOL
/// }
/// assert_eq!(takes_time::<Hour>(), "hr");
/// ```
///
/// ```compile_fail
/// use qunit_core::length::Meter;
/// use qunit_core::time::TimeUnit;
///
/// fn takes_time<U: TimeUnit>() {}
/// takes_time::<Meter>();
/// ```
#[macro_export]
macro_rules! dimension_trait {
    ($(#[$meta:meta])* $vis:vis trait $name:ident for $dim:ty) => {
        $(#[$meta])*
        $vis trait $name: $crate::Unit<Dim = $dim> {}
        impl<U: $crate::Unit<Dim = $dim>> $name for U {}
    };
}

/// Generates `From` trait implementations for all pairs of units within a dimension, for every representation.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<T: $crate::Scalar> From<$crate::Quantity<$first, T>> for $crate::Quantity<$rest, T> {
                fn from(value: $crate::Quantity<$first, T>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<T: $crate::Scalar> From<$crate::Quantity<$rest, T>> for $crate::Quantity<$first, T> {
                fn from(value: $crate::Quantity<$rest, T>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}
