//! Per-cell contents.

use rv_core::AgentId;

/// The contents of one grid cell, queried by tag.
///
/// A cell may carry dirt and a charger at the same time.  An obstacle cell
/// carries nothing else and is never entered; `GridWorld` and
/// `GridWorldBuilder` enforce that exclusivity.  `occupants` usually holds
/// zero or one agent — transient co-occupancy of non-charger cells is
/// permitted (the contention protocol only guards charger cells).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub obstacle: bool,
    pub dirt:     bool,
    pub charger:  bool,
    pub occupants: Vec<AgentId>,
}

impl Cell {
    /// `true` if the cell carries no tag and no agent — a candidate for
    /// scatter placement.
    #[inline]
    pub fn is_empty_floor(&self) -> bool {
        !self.obstacle && !self.dirt && !self.charger && self.occupants.is_empty()
    }
}
