//! Fleet storage: the roombas plus their per-agent RNGs.
//!
//! The agents and their RNGs live in two parallel `Vec`s so a single method
//! can hand out `&mut Roomba` and `&mut AgentRng` simultaneously — the
//! controller needs both for one agent while the world is also borrowed
//! mutably.  Field-level borrow splitting makes that safe without any
//! pointer tricks; execution is strictly sequential, so nothing fancier is
//! warranted.

use rv_core::{AgentId, AgentRng};

use crate::Roomba;

/// All agents in a simulation, indexed by `AgentId`.
pub struct Fleet {
    roombas: Vec<Roomba>,
    rngs:    Vec<AgentRng>,
}

impl Fleet {
    /// Build a fleet from constructed roombas, seeding one `AgentRng` per
    /// agent from the run's global seed.
    ///
    /// The `Vec` index of each roomba must equal `roomba.id.index()`; the
    /// simulation builder constructs them in order, so this holds by
    /// construction.
    pub fn new(roombas: Vec<Roomba>, global_seed: u64) -> Self {
        let rngs = roombas
            .iter()
            .map(|r| AgentRng::new(global_seed, r.id))
            .collect();
        Self { roombas, rngs }
    }

    pub fn len(&self) -> usize {
        self.roombas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roombas.is_empty()
    }

    /// All `AgentId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.roombas.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> &Roomba {
        &self.roombas[agent.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut Roomba {
        &mut self.roombas[agent.index()]
    }

    /// Mutable access to one agent and its RNG at the same time — the
    /// split-borrow the controller runs on.
    #[inline]
    pub fn agent_and_rng(&mut self, agent: AgentId) -> (&mut Roomba, &mut AgentRng) {
        (
            &mut self.roombas[agent.index()],
            &mut self.rngs[agent.index()],
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Roomba> + '_ {
        self.roombas.iter()
    }
}
