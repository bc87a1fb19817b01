//! The grid world: tag queries, neighbor enumeration, and occupancy mutation.
//!
//! # Data layout
//!
//! Cells live in one flat row-major `Vec<Cell>`; `(x, y)` maps to
//! `y * width + x` after topology normalization.  The world is dense and
//! small, so direct indexed access beats any spatial structure.
//!
//! # Topology
//!
//! `Bounded` worlds reject out-of-range coordinates; builders normally add a
//! permanent obstacle ring on the border as well.  `Toroidal` worlds wrap
//! coordinates on both axes, so every cell has exactly four neighbors.

use rv_core::{AgentId, GridPos, STEPS4};

use crate::{Cell, GridError, GridResult};

/// Boundary semantics of a world.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Coordinates outside `[0, width) × [0, height)` do not exist.
    Bounded,
    /// Coordinates wrap modulo the grid dimensions.
    Toroidal,
}

/// The simulation's grid world.
///
/// Construct via [`GridWorldBuilder`][crate::GridWorldBuilder].  Queries are
/// infallible (out-of-range positions read as "nothing there"); occupancy
/// mutations validate their preconditions and return [`GridError`].
pub struct GridWorld {
    width:    i32,
    height:   i32,
    topology: Topology,
    cells:    Vec<Cell>,
    /// Maintained count of dirt-tagged cells, so the metrics query is O(1).
    dirt_count: usize,
}

impl GridWorld {
    pub(crate) fn new(
        width: i32,
        height: i32,
        topology: Topology,
        cells: Vec<Cell>,
    ) -> Self {
        let dirt_count = cells.iter().filter(|c| c.dirt).count();
        Self { width, height, topology, cells, dirt_count }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of cells still carrying dirt.
    #[inline]
    pub fn dirt_count(&self) -> usize {
        self.dirt_count
    }

    // ── Coordinate normalization ──────────────────────────────────────────

    /// Map `pos` to its canonical in-world coordinate, or `None` if it does
    /// not exist (bounded worlds only — toroidal worlds wrap everything).
    #[inline]
    pub fn normalize(&self, pos: GridPos) -> Option<GridPos> {
        match self.topology {
            Topology::Bounded => {
                if pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height {
                    Some(pos)
                } else {
                    None
                }
            }
            Topology::Toroidal => Some(GridPos::new(
                pos.x.rem_euclid(self.width),
                pos.y.rem_euclid(self.height),
            )),
        }
    }

    #[inline]
    fn idx(&self, pos: GridPos) -> Option<usize> {
        self.normalize(pos)
            .map(|p| (p.y * self.width + p.x) as usize)
    }

    /// `true` if `pos` exists in this world.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.normalize(pos).is_some()
    }

    // ── Tag queries ───────────────────────────────────────────────────────

    /// The cell at `pos`, or `None` outside a bounded world.
    #[inline]
    pub fn cell(&self, pos: GridPos) -> Option<&Cell> {
        self.idx(pos).map(|i| &self.cells[i])
    }

    /// `true` if `pos` exists and is not an obstacle.
    #[inline]
    pub fn is_open(&self, pos: GridPos) -> bool {
        self.cell(pos).is_some_and(|c| !c.obstacle)
    }

    #[inline]
    pub fn is_obstacle(&self, pos: GridPos) -> bool {
        self.cell(pos).is_some_and(|c| c.obstacle)
    }

    #[inline]
    pub fn has_dirt(&self, pos: GridPos) -> bool {
        self.cell(pos).is_some_and(|c| c.dirt)
    }

    #[inline]
    pub fn has_charger(&self, pos: GridPos) -> bool {
        self.cell(pos).is_some_and(|c| c.charger)
    }

    /// Agents currently standing on `pos` (empty for out-of-range positions).
    pub fn agents_at(&self, pos: GridPos) -> &[AgentId] {
        match self.idx(pos) {
            Some(i) => &self.cells[i].occupants,
            None => &[],
        }
    }

    /// `true` if any agent other than `me` stands on `pos`.  This is the
    /// single-step contention query: the controller asks it about the next
    /// path cell when that cell is a charger.
    pub fn occupied_by_other(&self, pos: GridPos, me: AgentId) -> bool {
        self.agents_at(pos).iter().any(|&a| a != me)
    }

    // ── Neighbor enumeration ──────────────────────────────────────────────

    /// In-world 4-connected neighbors of `pos`, in the fixed `STEPS4`
    /// generation order (+x, −x, +y, −y).  Under `Toroidal` topology the
    /// result always has four entries.
    pub fn neighbors4(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        STEPS4
            .iter()
            .filter_map(move |&(dx, dy)| self.normalize(pos.offset(dx, dy)))
    }

    /// `neighbors4` minus obstacle cells — the traversable moves from `pos`.
    pub fn open_neighbors(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        self.neighbors4(pos).filter(|&p| !self.is_obstacle(p))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Remove the dirt tag at `pos`.  Returns `true` if dirt was present.
    pub fn remove_dirt(&mut self, pos: GridPos) -> bool {
        let Some(i) = self.idx(pos) else { return false };
        if self.cells[i].dirt {
            self.cells[i].dirt = false;
            self.dirt_count -= 1;
            true
        } else {
            false
        }
    }

    /// Put `agent` on `pos` without a source cell (initial placement).
    pub fn place_agent(&mut self, agent: AgentId, pos: GridPos) -> GridResult<()> {
        let i = self.idx(pos).ok_or(GridError::OutOfBounds(pos))?;
        if self.cells[i].obstacle {
            return Err(GridError::Blocked(pos));
        }
        if !self.cells[i].occupants.contains(&agent) {
            self.cells[i].occupants.push(agent);
        }
        Ok(())
    }

    /// Move `agent` from `from` to `to`, updating both cells' occupant lists.
    ///
    /// `agent` must currently stand on `from`, and `to` must be an open cell.
    /// Co-occupancy of `to` by other agents is allowed — the caller performs
    /// any contention check before committing the move.
    pub fn move_agent(&mut self, agent: AgentId, from: GridPos, to: GridPos) -> GridResult<()> {
        let from_i = self.idx(from).ok_or(GridError::OutOfBounds(from))?;
        let to_i = self.idx(to).ok_or(GridError::OutOfBounds(to))?;
        if self.cells[to_i].obstacle {
            return Err(GridError::Blocked(to));
        }

        let occupants = &mut self.cells[from_i].occupants;
        match occupants.iter().position(|&a| a == agent) {
            Some(slot) => {
                occupants.swap_remove(slot);
            }
            None => return Err(GridError::AgentNotAt { agent, pos: from }),
        }
        self.cells[to_i].occupants.push(agent);
        Ok(())
    }
}
