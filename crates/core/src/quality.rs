//! Item quality and the clamped arithmetic shared by every category rule.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Add `delta` to `current`, then clamp the result into `[min, max]`.
///
/// Saturates instead of overflowing, so extreme inputs still land inside the
/// bounds.
pub fn bounded_add(current: i32, delta: i32, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max, "bounded_add called with min > max");
    current.saturating_add(delta).clamp(min, max)
}

/// Quality of a shop item.
///
/// Not validated on construction; ordinary items are pulled back into
/// `[Quality::MIN, Quality::MAX]` by the next update.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    /// Floor for every category.
    pub const MIN: i32 = 0;
    /// Ceiling for every ordinary category.
    pub const MAX: i32 = 50;
    /// Fixed quality of a legendary item.
    pub const LEGENDARY: i32 = 80;

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// New quality shifted by `delta` and clamped to `[min, max]`.
    pub fn bounded_add(self, delta: i32, min: i32, max: i32) -> Self {
        Self(bounded_add(self.0, delta, min, max))
    }

    /// Shift by `delta` within the ordinary `[MIN, MAX]` range.
    pub fn step(self, delta: i32) -> Self {
        self.bounded_add(delta, Self::MIN, Self::MAX)
    }

    /// Whether the value lies inside the ordinary range.
    pub fn is_ordinary(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

impl ValueObject for Quality {}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Quality> for i32 {
    fn from(value: Quality) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounded_add_clamps_at_both_ends() {
        assert_eq!(bounded_add(10, -1, 0, 50), 9);
        assert_eq!(bounded_add(1, -2, 0, 50), 0);
        assert_eq!(bounded_add(49, 2, 0, 50), 50);
        assert_eq!(bounded_add(50, 3, 0, 50), 50);
    }

    #[test]
    fn bounded_add_saturates_on_overflow() {
        assert_eq!(bounded_add(i32::MAX, 3, 0, 50), 50);
        assert_eq!(bounded_add(i32::MIN, -2, 0, 50), 0);
    }

    #[test]
    fn step_pulls_out_of_range_values_back() {
        assert_eq!(Quality::new(70).step(1).value(), Quality::MAX);
        assert_eq!(Quality::new(-5).step(-1).value(), Quality::MIN);
    }

    #[test]
    fn serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&Quality::new(42)).unwrap(), "42");
        let q: Quality = serde_json::from_str("80").unwrap();
        assert_eq!(q.value(), Quality::LEGENDARY);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: the result always lies within the requested bounds.
        #[test]
        fn result_stays_in_bounds(
            current in any::<i32>(),
            delta in -10i32..=10,
            min in -100i32..=0,
            span in 0i32..=200,
        ) {
            let max = min + span;
            let out = bounded_add(current, delta, min, max);
            prop_assert!(out >= min && out <= max);
        }

        /// Property: inside the bounds the helper is plain addition.
        #[test]
        fn in_range_is_plain_addition(current in 5i32..=45, delta in -5i32..=5) {
            prop_assert_eq!(bounded_add(current, delta, 0, 50), current + delta);
        }
    }
}
