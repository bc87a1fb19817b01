//! Path-finding trait and the default breadth-first implementation.
//!
//! # Pluggability
//!
//! The controller calls path search via the [`PathFinder`] trait, so
//! applications can swap in custom implementations (A*, weighted search,
//! precomputed flow fields) without touching the decision engine.  The
//! default [`BfsPathFinder`] is the reference: on a uniform-cost grid BFS
//! already yields shortest paths.
//!
//! # Goal modes
//!
//! A search targets either an exact cell or the nearest cell satisfying a
//! predicate ([`PathGoal`]).  The predicate is **never evaluated against the
//! start cell** — an agent already standing on a satisfying cell would get a
//! degenerate zero-length "path" otherwise, and that case belongs to the
//! caller.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use rv_core::GridPos;
use rv_grid::GridWorld;

use crate::{NavError, NavResult, Path};

// ── Goal ──────────────────────────────────────────────────────────────────────

/// What a path search is looking for.
pub enum PathGoal<'a> {
    /// Reach exactly this cell.
    Cell(GridPos),
    /// Reach the nearest cell (by path length) satisfying the predicate.
    /// The predicate is not evaluated against the start cell.
    Nearest(&'a dyn Fn(GridPos) -> bool),
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path search over the grid world.
///
/// Implementations must never mutate the world and must be deterministic
/// given a deterministic world.
pub trait PathFinder: Send + Sync {
    /// Compute a path from `start` to `goal`, avoiding obstacle cells.
    ///
    /// Returns the ordered cells from the step after `start` to the goal
    /// inclusive.  `PathGoal::Cell(start)` yields an empty path.  An
    /// unreachable goal yields [`NavError::NoPath`].
    fn find_path(
        &self,
        world: &GridWorld,
        start: GridPos,
        goal:  PathGoal<'_>,
    ) -> NavResult<Path>;
}

// ── BfsPathFinder ─────────────────────────────────────────────────────────────

/// Standard breadth-first search over `open_neighbors`.
///
/// Expands neighbors in the fixed `STEPS4` generation order, which decides
/// the tie-break among equal-length paths — tests depend on it, so it is
/// part of the contract, not an implementation detail.
pub struct BfsPathFinder;

impl PathFinder for BfsPathFinder {
    fn find_path(
        &self,
        world: &GridWorld,
        start: GridPos,
        goal:  PathGoal<'_>,
    ) -> NavResult<Path> {
        bfs(world, start, &goal)
    }
}

fn bfs(world: &GridWorld, start: GridPos, goal: &PathGoal<'_>) -> NavResult<Path> {
    if let PathGoal::Cell(target) = goal {
        if *target == start {
            return Ok(Path::empty());
        }
    }

    // came_from[c] = the cell c was first reached from; start maps to itself.
    let mut came_from: FxHashMap<GridPos, GridPos> = FxHashMap::default();
    came_from.insert(start, start);

    let mut frontier: VecDeque<GridPos> = VecDeque::new();
    frontier.push_back(start);

    let mut found: Option<GridPos> = None;

    'search: while let Some(current) = frontier.pop_front() {
        match goal {
            PathGoal::Cell(target) => {
                if current == *target {
                    found = Some(current);
                    break 'search;
                }
            }
            PathGoal::Nearest(pred) => {
                if current != start && pred(current) {
                    found = Some(current);
                    break 'search;
                }
            }
        }

        for neighbor in world.open_neighbors(current) {
            if !came_from.contains_key(&neighbor) {
                came_from.insert(neighbor, current);
                frontier.push_back(neighbor);
            }
        }
    }

    let Some(goal_cell) = found else {
        return Err(NavError::NoPath { from: start });
    };

    // Walk parents back to the start, then reverse.
    let mut cells = Vec::new();
    let mut cursor = goal_cell;
    while cursor != start {
        cells.push(cursor);
        cursor = came_from[&cursor];
    }
    cells.reverse();
    Ok(Path::from_cells(cells))
}
