//! The `Sim` struct and its tick loop.

use rv_agent::Fleet;
use rv_core::{AgentId, SimConfig, SimRng, Tick};
use rv_grid::GridWorld;
use rv_nav::{ExplorationPolicy, PathFinder};

use crate::{Controller, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<F, E>` owns the world, the fleet, and the decision engine, and
/// drives the tick loop:
///
/// 1. **Shuffle**: draw this tick's agent activation order from the
///    scheduler RNG.  The order is re-randomized every tick; whenever two
///    agents contend for a charger, the outcome depends on it, so the RNG
///    is seeded for reproducibility.
/// 2. **Step**: run each agent's full decision procedure to completion
///    before the next agent starts.  No preemption, no partial decisions —
///    "contention" is resolved by this sequential order plus the
///    controller's last-step occupancy check, not by locks.
/// 3. **Observe**: fire the observer hooks.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<F: PathFinder, E: ExplorationPolicy> {
    /// Global configuration (total ticks, seed, snapshot interval).
    pub config: SimConfig,

    /// The grid world: tags and occupancy.
    pub world: GridWorld,

    /// All agents plus their per-agent RNGs.
    pub fleet: Fleet,

    /// The decision engine applied to every agent every tick.
    pub controller: Controller<F, E>,

    /// The tick about to be processed.
    pub current_tick: Tick,

    /// Scheduler RNG — activation order only, so agent decision streams
    /// stay independent of fleet size.
    pub(crate) scheduler_rng: SimRng,
}

impl<F: PathFinder, E: ExplorationPolicy> Sim<F, E> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.current_tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            self.process_tick()?;
            observer.on_tick_end(now, &self.world, &self.fleet);
            if self.config.output_interval_ticks > 0
                && now.0.is_multiple_of(self.config.output_interval_ticks)
            {
                observer.on_snapshot(now, &self.world, &self.fleet);
            }

            self.current_tick = now + 1;
        }
        observer.on_sim_end(self.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.current_tick;
            observer.on_tick_start(now);
            self.process_tick()?;
            observer.on_tick_end(now, &self.world, &self.fleet);
            if self.config.output_interval_ticks > 0
                && now.0.is_multiple_of(self.config.output_interval_ticks)
            {
                observer.on_snapshot(now, &self.world, &self.fleet);
            }
            self.current_tick = now + 1;
        }
        Ok(())
    }

    /// `true` once every dirt cell has been cleaned.
    pub fn is_clean(&self) -> bool {
        self.world.dirt_count() == 0
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) -> SimResult<()> {
        let mut order: Vec<AgentId> = self.fleet.ids().collect();
        self.scheduler_rng.shuffle(&mut order);

        for id in order {
            let (agent, rng) = self.fleet.agent_and_rng(id);
            self.controller.step_agent(&mut self.world, agent, rng)?;
        }
        Ok(())
    }
}
