//! Construct a [`GridWorld`] incrementally, then call [`build`](GridWorldBuilder::build).
//!
//! The builder accepts manual tag placement (tests, hand-crafted scenarios)
//! and seeded scatter placement (demo worlds).  Scatter samples distinct
//! empty-floor cells without replacement, so requested counts are exact as
//! long as enough floor remains.
//!
//! # Example
//!
//! ```
//! use rv_core::SimRng;
//! use rv_grid::GridWorldBuilder;
//!
//! let mut rng = SimRng::new(42);
//! let mut b = GridWorldBuilder::new(8, 8);
//! b.wall_border();
//! b.scatter_obstacles(4, &mut rng);
//! b.scatter_dirt(10, &mut rng);
//! let homes = b.scatter_chargers(2, &mut rng);
//! let world = b.build();
//! assert_eq!(world.dirt_count(), 10);
//! assert_eq!(homes.len(), 2);
//! ```

use rv_core::{GridPos, SimRng};

use crate::{Cell, GridWorld, Topology};

pub struct GridWorldBuilder {
    width:    i32,
    height:   i32,
    topology: Topology,
    cells:    Vec<Cell>,
}

impl GridWorldBuilder {
    /// Create a builder for a `width × height` world, `Bounded` by default.
    ///
    /// # Panics
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            topology: Topology::Bounded,
            cells: vec![Cell::default(); (width * height) as usize],
        }
    }

    /// Switch boundary semantics.  Call before any placement.
    pub fn topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    #[inline]
    fn idx(&self, pos: GridPos) -> usize {
        debug_assert!(
            pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height,
            "builder placement at {pos} is outside the grid"
        );
        (pos.y * self.width + pos.x) as usize
    }

    // ── Manual placement ──────────────────────────────────────────────────

    /// Mark every border cell as a permanent obstacle.
    ///
    /// The standard move for bounded worlds; pointless (but harmless) on a
    /// toroidal one.
    pub fn wall_border(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                if x == 0 || x == self.width - 1 || y == 0 || y == self.height - 1 {
                    self.obstacle(GridPos::new(x, y));
                }
            }
        }
    }

    /// Mark `pos` as an obstacle.  Obstacles are exclusive: any dirt or
    /// charger tag already on the cell is cleared.
    pub fn obstacle(&mut self, pos: GridPos) {
        let i = self.idx(pos);
        self.cells[i] = Cell { obstacle: true, ..Cell::default() };
    }

    /// Drop dirt on `pos`.  The cell must not be an obstacle.
    pub fn dirt(&mut self, pos: GridPos) {
        let i = self.idx(pos);
        debug_assert!(!self.cells[i].obstacle, "dirt on obstacle cell {pos}");
        self.cells[i].dirt = true;
    }

    /// Install a charger on `pos`.  The cell must not be an obstacle.
    pub fn charger(&mut self, pos: GridPos) {
        let i = self.idx(pos);
        debug_assert!(!self.cells[i].obstacle, "charger on obstacle cell {pos}");
        self.cells[i].charger = true;
    }

    // ── Seeded scatter ────────────────────────────────────────────────────

    /// Positions whose cells carry no tag yet, in row-major order.
    fn empty_floor(&self) -> Vec<GridPos> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| GridPos::new(x, y)))
            .filter(|&p| self.cells[self.idx(p)].is_empty_floor())
            .collect()
    }

    /// Sample up to `n` distinct empty-floor cells.
    fn sample_empty(&self, n: usize, rng: &mut SimRng) -> Vec<GridPos> {
        let mut candidates = self.empty_floor();
        rng.shuffle(&mut candidates);
        candidates.truncate(n);
        candidates
    }

    /// Scatter `n` obstacles over distinct empty cells.  Returns the chosen
    /// positions; fewer than `n` if the floor runs out.
    pub fn scatter_obstacles(&mut self, n: usize, rng: &mut SimRng) -> Vec<GridPos> {
        let chosen = self.sample_empty(n, rng);
        for &pos in &chosen {
            self.obstacle(pos);
        }
        chosen
    }

    /// Scatter `n` dirt patches over distinct empty cells.
    pub fn scatter_dirt(&mut self, n: usize, rng: &mut SimRng) -> Vec<GridPos> {
        let chosen = self.sample_empty(n, rng);
        for &pos in &chosen {
            self.dirt(pos);
        }
        chosen
    }

    /// Scatter `n` chargers over distinct empty cells.  The returned
    /// positions are the natural home assignments for `n` agents.
    pub fn scatter_chargers(&mut self, n: usize, rng: &mut SimRng) -> Vec<GridPos> {
        let chosen = self.sample_empty(n, rng);
        for &pos in &chosen {
            self.charger(pos);
        }
        chosen
    }

    /// Consume the builder and produce a [`GridWorld`].
    pub fn build(self) -> GridWorld {
        GridWorld::new(self.width, self.height, self.topology, self.cells)
    }
}
