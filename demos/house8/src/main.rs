//! house8 — smallest demo for the rust_rv vacuum-fleet simulator.
//!
//! Two roombas clean an 8×8 walled apartment with scattered furniture
//! (obstacles) and dirt.  An extra charger beyond the two home stations
//! gives the agents something to discover — and occasionally contend for.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use rv_core::{SimConfig, SimRng};
use rv_grid::GridWorldBuilder;
use rv_nav::{BfsPathFinder, LeastVisitedPolicy};
use rv_output::{CsvWriter, SimOutputObserver};
use rv_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:                 i32   = 8;
const HEIGHT:                i32   = 8;
const AGENT_COUNT:           usize = 2;
const OBSTACLE_COUNT:        usize = 6;
const DIRT_COUNT:            usize = 14;
const EXTRA_CHARGERS:        usize = 1;
const SEED:                  u64   = 42;
const TOTAL_TICKS:           u64   = 400;
const OUTPUT_INTERVAL_TICKS: u64   = 1;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== house8 — rust_rv vacuum fleet ===");
    println!("Grid: {WIDTH}x{HEIGHT}  |  Agents: {AGENT_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Build the world: walls, furniture, dirt, chargers.
    let mut world_rng = SimRng::new(SEED);
    let mut b = GridWorldBuilder::new(WIDTH, HEIGHT);
    b.wall_border();
    b.scatter_obstacles(OBSTACLE_COUNT, &mut world_rng);
    let dirt = b.scatter_dirt(DIRT_COUNT, &mut world_rng);
    let chargers = b.scatter_chargers(AGENT_COUNT + EXTRA_CHARGERS, &mut world_rng);
    let world = b.build();
    println!(
        "World: {} dirt patches, {} chargers ({} spare)",
        dirt.len(),
        chargers.len(),
        chargers.len() - AGENT_COUNT
    );

    // 2. Sim config.
    let config = SimConfig {
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };

    // 3. Build the sim: one agent per home charger.
    let mut builder = SimBuilder::new(config, world, BfsPathFinder, LeastVisitedPolicy);
    for &home in chargers.iter().take(AGENT_COUNT) {
        builder = builder.agent_at_home(home);
    }
    let mut sim = builder.build()?;

    // 4. Set up CSV output.
    std::fs::create_dir_all("output/house8")?;
    let writer = CsvWriter::new(Path::new("output/house8"))?;
    let mut obs = SimOutputObserver::new(writer);

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "Dirt remaining after {} ticks: {} of {}",
        TOTAL_TICKS,
        sim.world.dirt_count(),
        dirt.len()
    );
    println!();

    // 7. Final fleet table.
    println!("{:<8} {:<10} {:<8} {:<10} {:<16}", "Agent", "Pos", "Energy", "Moves", "State");
    println!("{}", "-".repeat(54));
    for r in sim.fleet.iter() {
        println!(
            "{:<8} {:<10} {:<8} {:<10} {:<16}",
            r.id.0,
            r.pos.to_string(),
            r.battery.level(),
            r.movements,
            r.state.to_string(),
        );
    }

    Ok(())
}
