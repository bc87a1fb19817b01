//! Simulation observer trait for progress reporting and data collection.

use rv_agent::Fleet;
use rv_core::Tick;
use rv_grid::GridWorld;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The world and fleet references give
/// read access to everything the metrics contract names: per-agent energy
/// and movement counters, and the world's remaining-dirt count.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, world: &GridWorld, _fleet: &Fleet) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} dirt left", world.dirt_count());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent acts.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after every agent has acted.
    fn on_tick_end(&mut self, _tick: Tick, _world: &GridWorld, _fleet: &Fleet) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks; never if that is 0).
    fn on_snapshot(&mut self, _tick: Tick, _world: &GridWorld, _fleet: &Fleet) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
