//! Shop inventory domain module.
//!
//! This crate contains the daily update rules for shop items, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod inventory;
pub mod item;

pub use category::{Adjustment, Category};
pub use inventory::{DayReport, Inventory, QualityChange};
pub use item::{Item, ItemSnapshot};
