//! A list of independently-updated items plus a day counter.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::item::{Item, ItemSnapshot};

/// Quality movement of one item during one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityChange {
    pub name: String,
    pub quality_before: i32,
    pub quality_after: i32,
    pub days_remaining: i32,
}

impl QualityChange {
    pub fn delta(&self) -> i32 {
        self.quality_after - self.quality_before
    }
}

/// Outcome of [`Inventory::advance_day`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// Day number reached (1 after the first advance).
    pub day: u32,
    pub changes: Vec<QualityChange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    day: u32,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tick every item once. No item's update reads another item's state.
    pub fn advance_day(&mut self) -> DayReport {
        let mut changes = Vec::with_capacity(self.items.len());

        for item in &mut self.items {
            let quality_before = item.quality();
            item.tick();

            tracing::debug!(
                item = %item.name(),
                category = %item.category(),
                days_remaining = item.days_remaining(),
                quality_before,
                quality_after = item.quality(),
                "item ticked"
            );

            changes.push(QualityChange {
                name: item.name().to_string(),
                quality_before,
                quality_after: item.quality(),
                days_remaining: item.days_remaining(),
            });
        }

        self.day += 1;
        tracing::info!(day = self.day, items = self.items.len(), "day advanced");

        DayReport {
            day: self.day,
            changes,
        }
    }

    pub fn advance(&mut self, days: u32) -> Vec<DayReport> {
        (0..days).map(|_| self.advance_day()).collect()
    }

    pub fn snapshots(&self) -> Vec<ItemSnapshot> {
        self.items.iter().map(Item::snapshot).collect()
    }

    /// Verify every item's quality lies inside its category's range.
    ///
    /// Items built with [`Item::new`] (or deserialized) may start out of
    /// range; this reports the first offender.
    pub fn check_invariants(&self) -> DomainResult<()> {
        for item in &self.items {
            let range = item.category().quality_range();
            if !range.contains(&item.quality()) {
                return Err(DomainError::invariant(format!(
                    "{:?} has quality {} outside {}..={}",
                    item.name(),
                    item.quality(),
                    range.start(),
                    range.end()
                )));
            }
        }
        Ok(())
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE_NAME, BACKSTAGE_PASS_NAME, LEGENDARY_NAME};
    use proptest::prelude::*;

    fn sample() -> Inventory {
        Inventory::new(vec![
            Item::new("+5 Dexterity Vest", 10, 20),
            Item::new(AGED_BRIE_NAME, 2, 0),
            Item::new(LEGENDARY_NAME, 0, 80),
            Item::new(BACKSTAGE_PASS_NAME, 15, 20),
        ])
    }

    #[test]
    fn advance_day_ticks_each_item_once() {
        let mut inventory = sample();
        let report = inventory.advance_day();

        assert_eq!(report.day, 1);
        assert_eq!(inventory.day(), 1);
        assert_eq!(report.changes.len(), 4);

        let deltas: Vec<i32> = report.changes.iter().map(QualityChange::delta).collect();
        assert_eq!(deltas, vec![-1, 1, 0, 1]);

        let days: Vec<i32> = inventory.items().iter().map(Item::days_remaining).collect();
        assert_eq!(days, vec![9, 1, 0, 14]);
    }

    #[test]
    fn advance_returns_one_report_per_day() {
        let mut inventory = sample();
        let reports = inventory.advance(3);
        assert_eq!(reports.iter().map(|r| r.day).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(inventory.day(), 3);

        let brie = &inventory.items()[1];
        assert_eq!((brie.days_remaining(), brie.quality()), (-1, 4));
    }

    #[test]
    fn empty_inventory_still_counts_days() {
        let mut inventory = Inventory::default();
        assert!(inventory.is_empty());
        let report = inventory.advance_day();
        assert_eq!(report.day, 1);
        assert!(report.changes.is_empty());
    }

    #[test]
    fn check_invariants_flags_out_of_range_items() {
        let mut inventory = sample();
        assert!(inventory.check_invariants().is_ok());

        inventory.push(Item::new("Normal Item", 5, 60));
        let err = inventory.check_invariants().unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("Normal Item") => {}
            _ => panic!("Expected InvariantViolation for quality above ceiling"),
        }

        inventory.advance_day();
        assert!(inventory.check_invariants().is_ok());
    }

    #[test]
    fn snapshots_mirror_items() {
        let inventory: Inventory = vec![Item::new(AGED_BRIE_NAME, 2, 0)].into_iter().collect();
        assert_eq!(
            inventory.snapshots(),
            vec![ItemSnapshot {
                name: AGED_BRIE_NAME.to_string(),
                days_remaining: 2,
                quality: 0,
            }]
        );
    }

    fn any_item() -> impl Strategy<Value = Item> {
        let name = prop_oneof![
            Just(LEGENDARY_NAME.to_string()),
            Just(AGED_BRIE_NAME.to_string()),
            Just(BACKSTAGE_PASS_NAME.to_string()),
            "[A-Za-z][A-Za-z0-9 ]{0,30}",
        ];
        (name, -20i32..=30, 0i32..=50).prop_map(|(name, days, quality)| {
            if name == LEGENDARY_NAME {
                Item::new(name, days, 80)
            } else {
                Item::new(name, days, quality)
            }
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: item order does not change any item's outcome.
        #[test]
        fn processing_order_is_irrelevant(
            items in prop::collection::vec(any_item(), 0..12),
            days in 0u32..20,
        ) {
            let mut forward = Inventory::new(items.clone());
            let mut reversed = Inventory::new(items.into_iter().rev().collect());

            forward.advance(days);
            reversed.advance(days);

            let mut back: Vec<ItemSnapshot> = reversed.snapshots();
            back.reverse();
            prop_assert_eq!(forward.snapshots(), back);
        }

        /// Property: in-range inventories stay in range forever.
        #[test]
        fn invariants_hold_after_any_number_of_days(
            items in prop::collection::vec(any_item(), 0..12),
            days in 0u32..60,
        ) {
            let mut inventory = Inventory::new(items);
            prop_assert!(inventory.check_invariants().is_ok());
            inventory.advance(days);
            prop_assert!(inventory.check_invariants().is_ok());
        }
    }
}
