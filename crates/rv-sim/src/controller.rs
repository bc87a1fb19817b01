//! The per-tick decision procedure — one agent, one tick, one action.
//!
//! # Rule order
//!
//! The rules below run in a fixed priority order; the first move-consuming
//! rule that fires ends the agent's tick (cleaning falls through).  The
//! order is **behavioral contract, not style**: the post-charge-resume and
//! retrace rules both consult the return stack, and which one fires when
//! several conditions hold at once is decided purely by this ordering.
//! Reordering them produces a different (and wrong) robot.
//!
//! 1. Clean the current cell.
//! 2. Depleted handling (terminal off-charger).
//! 3. Charging in place.
//! 4. Seek a charger when the battery is low.
//! 5. One-tick post-charge hop.
//! 6. Retrace the recorded route away from the charger.
//! 7. Normal operation: adjacent dirt first, else explore.
//!
//! # Charger exclusivity
//!
//! Every committed move goes through `try_move`, which refuses to enter a
//! charger cell another agent occupies.  For a planned path that refusal
//! also discards the route (replanned next tick).  Non-charger cells are
//! deliberately not guarded: two agents may transiently share one.

use rv_core::{AgentRng, GridPos};
use rv_grid::GridWorld;
use rv_nav::{ExplorationPolicy, NavError, Path, PathFinder, PathGoal};

use rv_agent::{Roomba, RoombaState};

use crate::SimResult;

/// The decision engine, generic over the path search and the exploration
/// policy so either can be swapped without touching the rules.
pub struct Controller<F: PathFinder, E: ExplorationPolicy> {
    finder: F,
    policy: E,
}

impl<F: PathFinder, E: ExplorationPolicy> Controller<F, E> {
    pub fn new(finder: F, policy: E) -> Self {
        Self { finder, policy }
    }

    /// Run one agent's full decision-and-action routine for this tick.
    pub fn step_agent(
        &self,
        world: &mut GridWorld,
        agent: &mut Roomba,
        rng:   &mut AgentRng,
    ) -> SimResult<()> {
        // ── Rule 1: clean ─────────────────────────────────────────────────
        //
        // Cleaning costs one energy unit and does not consume the tick's
        // move; control falls through to the rules below.
        if world.has_dirt(agent.pos) {
            world.remove_dirt(agent.pos);
            agent.battery.drain();
            if agent.state != RoombaState::Charging {
                agent.state = RoombaState::Cleaning;
            }
        }

        // ── Rule 2: depleted ──────────────────────────────────────────────
        //
        // Zero energy on a charger still recovers; anywhere else is
        // terminal.  There is deliberately no rescue path.
        if agent.battery.is_empty() {
            if world.has_charger(agent.pos) {
                agent.state = RoombaState::Charging;
                agent.battery.charge_step();
                agent.visits.record(agent.pos);
            } else {
                agent.state = RoombaState::Depleted;
            }
            return Ok(());
        }

        // ── Rule 3: charging in place ─────────────────────────────────────
        if agent.state == RoombaState::Charging && world.has_charger(agent.pos) {
            let full = agent.battery.charge_step();
            agent.visits.record(agent.pos);
            if !full {
                return Ok(());
            }
            // Topped up this tick: leave Charging and keep going — the agent
            // may move in the same tick it finishes charging.
            agent.state = RoombaState::Exploring;
            agent.just_finished_charging = true;
        }

        // ── Rule 4: seek charger ──────────────────────────────────────────
        if agent.battery.is_low() && agent.state != RoombaState::Charging {
            agent.chargers.observe(world, agent.pos);

            if world.has_charger(agent.pos) {
                // Already standing on one: start charging, nothing spent.
                agent.state = RoombaState::Charging;
                agent.planned_path.clear();
                return Ok(());
            }

            agent.state = RoombaState::SeekingCharger;
            if agent.planned_path.is_empty() {
                agent.planned_path = self.plan_route_to_charger(world, agent);
            }
            self.advance_along_path(world, agent)?;

            // The attempt costs the tick's energy whether or not a step was
            // taken (no route / contested charger).
            agent.visits.record(agent.pos);
            agent.battery.drain();
            return Ok(());
        }

        // ── Rule 5: post-charge resume ────────────────────────────────────
        //
        // One-tick edge: prefer a never-visited neighbor, else start the
        // retrace.  The flag clears regardless of whether a move happened.
        if agent.just_finished_charging {
            agent.just_finished_charging = false;

            let unvisited: Vec<GridPos> = world
                .open_neighbors(agent.pos)
                .filter(|&p| agent.visits.count(p) == 0)
                .collect();

            let target = match rng.choose(&unvisited) {
                Some(&cell) => Some((cell, RoombaState::Exploring)),
                None => agent
                    .return_stack
                    .last()
                    .map(|&cell| (cell, RoombaState::ReturningHome)),
            };

            if let Some((next, state)) = target {
                if try_move(world, agent, next)? {
                    if state == RoombaState::ReturningHome {
                        agent.return_stack.pop();
                    }
                    agent.state = state;
                    agent.visits.record(agent.pos);
                    agent.battery.drain();
                }
            }
            return Ok(());
        }

        // ── Rule 6: resume return path ────────────────────────────────────
        //
        // A retrace, not a fresh search: replay the exact cells recorded on
        // the way to the charger.  Adjacent dirt aborts the retrace in favor
        // of opportunistic cleaning.
        if agent.state != RoombaState::Charging {
            if let Some(&next) = agent.return_stack.last() {
                if try_move(world, agent, next)? {
                    agent.return_stack.pop();
                    agent.state = RoombaState::ReturningHome;
                }
                agent.visits.record(agent.pos);
                agent.battery.drain();
                if dirt_adjacent(world, agent.pos) {
                    agent.return_stack.clear();
                }
                return Ok(());
            }
        }

        // ── Rule 7: normal operation ──────────────────────────────────────
        if agent.state != RoombaState::Charging && !agent.battery.is_low() {
            agent.chargers.observe(world, agent.pos);

            let dirty: Vec<GridPos> = world
                .open_neighbors(agent.pos)
                .filter(|&p| world.has_dirt(p))
                .collect();

            // Dirt within one step always beats exploration.
            let target = match rng.choose(&dirty) {
                Some(&cell) => cell,
                None => self
                    .policy
                    .choose_next(world, agent.pos, agent.visits.map(), rng),
            };

            if target != agent.pos {
                try_move(world, agent, target)?;
            }
            agent.state = RoombaState::Exploring;
            agent.visits.record(agent.pos);
            agent.battery.drain();
        }

        Ok(())
    }

    // ── Route planning ────────────────────────────────────────────────────

    /// Shortest path to the nearest known charger, falling back to a direct
    /// search for the home charger.  An empty path means "no way there this
    /// tick" — the caller stays put and retries next tick.
    fn plan_route_to_charger(&self, world: &GridWorld, agent: &Roomba) -> Path {
        let registry = &agent.chargers;
        let is_known = |p: GridPos| registry.knows(p);

        match self
            .finder
            .find_path(world, agent.pos, PathGoal::Nearest(&is_known))
        {
            Ok(path) => path,
            Err(NavError::NoPath { .. }) => self
                .finder
                .find_path(world, agent.pos, PathGoal::Cell(registry.home()))
                .unwrap_or_else(|_| Path::empty()),
        }
    }

    /// Take one step along the cached route, recording the vacated cell for
    /// the retrace.  Entering the charger flips the agent to `Charging` in
    /// the same tick.  A contested charger discards the route instead.
    fn advance_along_path(&self, world: &mut GridWorld, agent: &mut Roomba) -> SimResult<()> {
        let Some(next) = agent.planned_path.next_step() else {
            return Ok(());
        };

        let from = agent.pos;
        if !try_move(world, agent, next)? {
            agent.planned_path.clear();
            return Ok(());
        }

        agent.return_stack.push(from);
        agent.planned_path.advance();

        if world.has_charger(next) {
            agent.state = RoombaState::Charging;
            agent.planned_path.clear();
        }
        Ok(())
    }
}

// ── Move primitives ───────────────────────────────────────────────────────────

/// Commit a move unless `to` is a charger cell another agent occupies.
/// Returns `true` if the agent moved.
fn try_move(world: &mut GridWorld, agent: &mut Roomba, to: GridPos) -> SimResult<bool> {
    if world.has_charger(to) && world.occupied_by_other(to, agent.id) {
        return Ok(false);
    }
    world.move_agent(agent.id, agent.pos, to)?;
    agent.pos = to;
    agent.movements += 1;
    Ok(true)
}

fn dirt_adjacent(world: &GridWorld, pos: GridPos) -> bool {
    world.neighbors4(pos).any(|p| world.has_dirt(p))
}
