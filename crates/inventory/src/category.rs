//! Item categories and their per-day rule table.

use serde::{Deserialize, Serialize};

use gildedrose_core::Quality;

/// Exact name of the legendary item.
pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
/// Exact name of the cheese that improves with age.
pub const AGED_BRIE_NAME: &str = "Aged Brie";
/// Exact name of the concert pass.
pub const BACKSTAGE_PASS_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Name prefix marking a conjured item.
#[cfg(feature = "conjured")]
pub const CONJURED_PREFIX: &str = "Conjured";

/// Closed set of update rules, resolved once from the item name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Never sold, never decays. Quality stays at 80.
    Legendary,
    /// Gains quality as it ages, twice as fast past its sell date.
    AgingBrie,
    /// Gains quality as the event nears, worthless once it has passed.
    EventPass,
    /// Normal decay at double rate. Only built with the `conjured` feature.
    #[cfg(feature = "conjured")]
    Conjured,
    /// Loses quality each day, twice as fast past its sell date.
    Normal,
}

/// What a single day does to an item's quality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Adjustment {
    /// Shift by the delta, then clamp to the ordinary range.
    Shift(i32),
    /// Force quality to zero.
    Reset,
}

impl Category {
    /// Classify an item by name. First match wins; anything unrecognised is
    /// [`Category::Normal`].
    pub fn classify(name: &str) -> Self {
        match name {
            LEGENDARY_NAME => Category::Legendary,
            AGED_BRIE_NAME => Category::AgingBrie,
            BACKSTAGE_PASS_NAME => Category::EventPass,
            #[cfg(feature = "conjured")]
            n if n.starts_with(CONJURED_PREFIX) => Category::Conjured,
            _ => Category::Normal,
        }
    }

    /// Whether a day passing touches this item at all.
    pub fn ages(self) -> bool {
        !matches!(self, Category::Legendary)
    }

    /// Quality adjustment for one day, given `days_remaining` *after* the
    /// daily decrement.
    ///
    /// | Category   | `days >= 10` | `5..10` | `0..5` | `< 0`   |
    /// |------------|--------------|---------|--------|---------|
    /// | Normal     | -1           | -1      | -1     | -2      |
    /// | Conjured   | -2           | -2      | -2     | -4      |
    /// | AgingBrie  | +1           | +1      | +1     | +2      |
    /// | EventPass  | +1           | +2      | +3     | reset   |
    /// | Legendary  | 0            | 0       | 0      | 0       |
    pub fn adjustment(self, days_remaining: i32) -> Adjustment {
        let expired = days_remaining < 0;
        match self {
            Category::Legendary => Adjustment::Shift(0),
            Category::Normal => Adjustment::Shift(if expired { -2 } else { -1 }),
            #[cfg(feature = "conjured")]
            Category::Conjured => Adjustment::Shift(if expired { -4 } else { -2 }),
            Category::AgingBrie => Adjustment::Shift(if expired { 2 } else { 1 }),
            Category::EventPass => match days_remaining {
                d if d < 0 => Adjustment::Reset,
                d if d < 5 => Adjustment::Shift(3),
                d if d < 10 => Adjustment::Shift(2),
                _ => Adjustment::Shift(1),
            },
        }
    }

    /// Inclusive quality range an item of this category may hold.
    pub fn quality_range(self) -> core::ops::RangeInclusive<i32> {
        match self {
            Category::Legendary => Quality::LEGENDARY..=Quality::LEGENDARY,
            _ => Quality::MIN..=Quality::MAX,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Category::Legendary => "legendary",
            Category::AgingBrie => "aging_brie",
            Category::EventPass => "event_pass",
            #[cfg(feature = "conjured")]
            Category::Conjured => "conjured",
            Category::Normal => "normal",
        };
        f.write_str(label)
    }
}
