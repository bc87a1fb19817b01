//! What a roomba remembers: where it has been, and where the chargers are.

use rustc_hash::FxHashSet;

use rv_core::GridPos;
use rv_grid::GridWorld;
use rv_nav::VisitMap;

// ── VisitLog ──────────────────────────────────────────────────────────────────

/// Per-agent visit counter.  Counts are monotonically non-decreasing and a
/// cell gains an entry only once the agent has actually occupied it.
#[derive(Debug, Default, Clone)]
pub struct VisitLog {
    counts: VisitMap,
}

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tick spent at `pos`.
    pub fn record(&mut self, pos: GridPos) {
        *self.counts.entry(pos).or_insert(0) += 1;
    }

    /// How many ticks the agent has ended at `pos` (zero if never).
    #[inline]
    pub fn count(&self, pos: GridPos) -> u32 {
        self.counts.get(&pos).copied().unwrap_or(0)
    }

    /// Number of distinct cells ever occupied — the coverage metric.
    pub fn cells_visited(&self) -> usize {
        self.counts.len()
    }

    /// The raw map, in the shape the exploration policy consumes.
    #[inline]
    pub fn map(&self) -> &VisitMap {
        &self.counts
    }
}

// ── ChargerRegistry ───────────────────────────────────────────────────────────

/// Per-agent memory of discovered charger positions.
///
/// Grows monotonically: chargers are never forgotten, even if later found
/// occupied.  The home charger is inserted at construction, so the set is
/// structurally never empty and `home ∈ known` holds for the agent's whole
/// life.
#[derive(Debug, Clone)]
pub struct ChargerRegistry {
    home:  GridPos,
    known: FxHashSet<GridPos>,
}

impl ChargerRegistry {
    pub fn new(home: GridPos) -> Self {
        let mut known = FxHashSet::default();
        known.insert(home);
        Self { home, known }
    }

    /// The charger assigned at creation.
    #[inline]
    pub fn home(&self) -> GridPos {
        self.home
    }

    #[inline]
    pub fn knows(&self, pos: GridPos) -> bool {
        self.known.contains(&pos)
    }

    /// Number of distinct chargers discovered so far.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Scan `pos` and its 4-connected neighborhood for charger cells and
    /// union them into the known set.
    ///
    /// Called opportunistically from both normal movement and the
    /// seek-charger rule, so chargers are discovered passively while the
    /// agent goes about its cleaning.
    pub fn observe(&mut self, world: &GridWorld, pos: GridPos) {
        if world.has_charger(pos) {
            self.known.insert(pos);
        }
        for neighbor in world.neighbors4(pos) {
            if world.has_charger(neighbor) {
                self.known.insert(neighbor);
            }
        }
    }
}
