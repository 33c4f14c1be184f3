use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, Quality};

use crate::category::{Adjustment, Category};

/// A shop item whose quality and sell-by countdown change once per day.
///
/// The category is resolved from `name` at construction and never
/// re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ItemSnapshot", from = "ItemSnapshot")]
pub struct Item {
    name: String,
    category: Category,
    days_remaining: i32,
    quality: Quality,
}

/// Wire/display form of an [`Item`]: just the name, countdown and quality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub name: String,
    pub days_remaining: i32,
    pub quality: i32,
}

impl Item {
    /// Create an item. Quality is taken as given; out-of-range values are
    /// corrected by the next [`Item::tick`].
    pub fn new(name: impl Into<String>, days_remaining: i32, quality: i32) -> Self {
        let name = name.into();
        Self {
            category: Category::classify(&name),
            name,
            days_remaining,
            quality: Quality::new(quality),
        }
    }

    /// Create an item, rejecting a quality outside its category's range
    /// (`0..=50`, or exactly 80 for the legendary item).
    pub fn try_new(name: impl Into<String>, days_remaining: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, days_remaining, quality);
        let range = item.category.quality_range();
        if !range.contains(&quality) {
            return Err(DomainError::validation(format!(
                "quality {quality} out of range {}..={} for {} item {:?}",
                range.start(),
                range.end(),
                item.category,
                item.name
            )));
        }
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn days_remaining(&self) -> i32 {
        self.days_remaining
    }

    pub fn quality(&self) -> i32 {
        self.quality.value()
    }

    /// Past the sell date (`days_remaining < 0`).
    pub fn is_expired(&self) -> bool {
        self.days_remaining < 0
    }

    /// Advance this item by exactly one day.
    ///
    /// The countdown is decremented first; the quality adjustment is then
    /// chosen from the new value. Legendary items are left untouched.
    pub fn tick(&mut self) {
        if !self.category.ages() {
            return;
        }

        self.days_remaining = self.days_remaining.saturating_sub(1);

        self.quality = match self.category.adjustment(self.days_remaining) {
            Adjustment::Shift(delta) => self.quality.step(delta),
            Adjustment::Reset => Quality::new(Quality::MIN),
        };
    }

    pub fn snapshot(&self) -> ItemSnapshot {
        ItemSnapshot::from(self.clone())
    }
}

impl From<Item> for ItemSnapshot {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            days_remaining: item.days_remaining,
            quality: item.quality.value(),
        }
    }
}

impl From<ItemSnapshot> for Item {
    fn from(snapshot: ItemSnapshot) -> Self {
        Item::new(snapshot.name, snapshot.days_remaining, snapshot.quality)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.days_remaining, self.quality)
    }
}
