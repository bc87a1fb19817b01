//! Fluent builder for constructing a [`Sim`].

use rv_agent::{EnergyParams, Fleet, Roomba};
use rv_core::{AgentId, GridPos, SimConfig, SimRng, Tick};
use rv_grid::GridWorld;
use rv_nav::{ExplorationPolicy, PathFinder};

use crate::{Controller, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<F, E>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, snapshot interval
/// - [`GridWorld`] — from [`rv_grid::GridWorldBuilder`]
/// - `F: PathFinder` — e.g. [`rv_nav::BfsPathFinder`]
/// - `E: ExplorationPolicy` — e.g. [`rv_nav::LeastVisitedPolicy`]
///
/// # Agents
///
/// Add agents with [`agent`](Self::agent) (explicit start) or
/// [`agent_at_home`](Self::agent_at_home) (start on the home charger — the
/// normal deployment).  `build()` validates every home is a charger cell and
/// every start is open, and places the agents into the world's occupancy.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, world, BfsPathFinder, LeastVisitedPolicy)
///     .agent_at_home(homes[0])
///     .agent_at_home(homes[1])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<F: PathFinder, E: ExplorationPolicy> {
    config: SimConfig,
    world:  GridWorld,
    finder: F,
    policy: E,
    energy: EnergyParams,
    spawns: Vec<(GridPos, GridPos)>, // (start, home)
}

impl<F: PathFinder, E: ExplorationPolicy> SimBuilder<F, E> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, world: GridWorld, finder: F, policy: E) -> Self {
        Self {
            config,
            world,
            finder,
            policy,
            energy: EnergyParams::default(),
            spawns: Vec::new(),
        }
    }

    /// Override the fleet-wide energy constants.
    pub fn energy_params(mut self, energy: EnergyParams) -> Self {
        self.energy = energy;
        self
    }

    /// Add an agent starting at `start` with `home` as its assigned charger.
    pub fn agent(mut self, start: GridPos, home: GridPos) -> Self {
        self.spawns.push((start, home));
        self
    }

    /// Add an agent starting on its home charger — the normal deployment.
    pub fn agent_at_home(self, home: GridPos) -> Self {
        self.agent(home, home)
    }

    /// Validate inputs, place the agents, and return a ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<F, E>> {
        let mut roombas = Vec::with_capacity(self.spawns.len());

        for (i, &(start, home)) in self.spawns.iter().enumerate() {
            if !self.world.has_charger(home) {
                return Err(SimError::HomeNotCharger(home));
            }
            if !self.world.is_open(start) {
                return Err(SimError::StartBlocked(start));
            }
            // Charger exclusivity holds from tick 0: two agents may not be
            // deployed onto the same charger cell.
            let id = AgentId(i as u32);
            if self.world.has_charger(start) && self.world.occupied_by_other(start, id) {
                return Err(SimError::StartContested(start));
            }

            self.world.place_agent(id, start)?;
            roombas.push(Roomba::new(id, start, home, self.energy));
        }

        let fleet = Fleet::new(roombas, self.config.seed);

        // The scheduler stream is derived off the root seed so it never
        // aliases an agent's decision stream or the world-generation stream.
        let mut root = SimRng::new(self.config.seed);
        let scheduler_rng = root.child(1);

        Ok(Sim {
            config: self.config,
            world: self.world,
            fleet,
            controller: Controller::new(self.finder, self.policy),
            current_tick: Tick::ZERO,
            scheduler_rng,
        })
    }
}
