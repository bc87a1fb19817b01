//! The exploration heuristic: where to go when there is nothing to clean.

use rustc_hash::FxHashMap;

use rv_core::{AgentRng, GridPos};
use rv_grid::GridWorld;

/// Per-coordinate visit counter, keyed by cell.  Owned by each agent;
/// entries exist only for cells the agent has actually occupied.
pub type VisitMap = FxHashMap<GridPos, u32>;

/// Pluggable exploration step selection.
///
/// Called when an agent has no dirt in reach and no pending route; returns
/// the cell to move into, or `current` unchanged when the agent is boxed in.
pub trait ExplorationPolicy: Send + Sync {
    fn choose_next(
        &self,
        world:   &GridWorld,
        current: GridPos,
        visits:  &VisitMap,
        rng:     &mut AgentRng,
    ) -> GridPos;
}

/// Coverage-biased random walk: prefer neighbors never seen, then the least
/// seen.
///
/// Among open neighbors, pick uniformly at random from the zero-visit subset
/// if any exists; otherwise uniformly from the subset sharing the minimum
/// visit count.  This approximates coverage maximization without maintaining
/// a global frontier — a trade-off favoring O(degree) per-tick decision cost
/// over optimal coverage.
pub struct LeastVisitedPolicy;

impl ExplorationPolicy for LeastVisitedPolicy {
    fn choose_next(
        &self,
        world:   &GridWorld,
        current: GridPos,
        visits:  &VisitMap,
        rng:     &mut AgentRng,
    ) -> GridPos {
        let neighbors: Vec<GridPos> = world.open_neighbors(current).collect();
        if neighbors.is_empty() {
            return current;
        }

        let count = |p: &GridPos| visits.get(p).copied().unwrap_or(0);

        let unvisited: Vec<GridPos> =
            neighbors.iter().copied().filter(|p| count(p) == 0).collect();
        if let Some(&pick) = rng.choose(&unvisited) {
            return pick;
        }

        let min_visits = neighbors.iter().map(count).min().unwrap_or(0);
        let least: Vec<GridPos> = neighbors
            .into_iter()
            .filter(|p| count(p) == min_visits)
            .collect();
        match rng.choose(&least) {
            Some(&pick) => pick,
            None => current,
        }
    }
}
