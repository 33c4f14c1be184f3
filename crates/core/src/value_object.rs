//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one,
/// produce a new value (see [`crate::Quality::bounded_add`]).
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Quality(i32);
///
/// impl ValueObject for Quality {}
///
/// assert_eq!(Quality(10), Quality(10));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
