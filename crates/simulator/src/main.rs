use gildedrose_simulator::{fixture, run, SimConfig};

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = SimConfig::from_env();
    let stdout = std::io::stdout();
    run(&config, fixture(), &mut stdout.lock())
}
