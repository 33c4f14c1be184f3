//! Day-by-day driver for the shop inventory.

pub mod config;

use std::io::Write;

use anyhow::Context;
use gildedrose_inventory::{Inventory, Item};

pub use config::{OutputFormat, SimConfig};

/// The classic fixture stock.
pub fn fixture() -> Inventory {
    Inventory::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ])
}

/// Print the inventory as it stands on day 0, then after each of
/// `config.days` days.
pub fn run<W: Write>(config: &SimConfig, mut inventory: Inventory, out: &mut W) -> anyhow::Result<()> {
    tracing::info!(days = config.days, items = inventory.len(), "simulation starting");

    write_day(config.output, &inventory, out)?;
    for _ in 0..config.days {
        inventory.advance_day();
        write_day(config.output, &inventory, out)?;
    }

    if let Err(err) = inventory.check_invariants() {
        tracing::warn!(error = %err, "inventory ended out of range");
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn write_day<W: Write>(format: OutputFormat, inventory: &Inventory, out: &mut W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "-------- day {} --------", inventory.day())?;
            writeln!(out, "name, days_remaining, quality")?;
            for item in inventory.items() {
                writeln!(out, "{item}")?;
            }
            writeln!(out)?;
        }
        OutputFormat::JsonLines => {
            let line = serde_json::json!({
                "day": inventory.day(),
                "items": inventory.snapshots(),
            });
            serde_json::to_writer(&mut *out, &line).context("failed to encode day as JSON")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
