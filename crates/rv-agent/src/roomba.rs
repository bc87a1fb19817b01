//! The roomba itself.

use std::fmt;

use rv_core::{AgentId, GridPos};
use rv_nav::Path;

use crate::{Battery, ChargerRegistry, EnergyParams, VisitLog};

/// The explicit operating mode of a roomba.
///
/// One tagged state instead of a set of boolean flags, so invalid flag
/// combinations cannot be represented.  `Cleaning` is transient: cleaning
/// falls through to a movement rule in the same tick, which usually
/// overwrites it before the tick ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoombaState {
    /// Wandering for dirt under the exploration policy.
    Exploring,
    /// Removed dirt from the current cell this tick.
    Cleaning,
    /// Low battery; following a planned path to a known charger.
    SeekingCharger,
    /// Standing on a charger, refilling.
    Charging,
    /// Retracing the recorded route away from the charger.
    ReturningHome,
    /// Battery hit zero away from any charger.  Terminal.
    Depleted,
}

impl fmt::Display for RoombaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoombaState::Exploring      => "exploring",
            RoombaState::Cleaning       => "cleaning",
            RoombaState::SeekingCharger => "seeking_charger",
            RoombaState::Charging       => "charging",
            RoombaState::ReturningHome  => "returning_home",
            RoombaState::Depleted       => "depleted",
        };
        f.write_str(s)
    }
}

/// One cleaning agent.  Owned exclusively by the [`Fleet`][crate::Fleet];
/// the controller in `rv-sim` is the only code that mutates it after
/// construction.
pub struct Roomba {
    pub id:  AgentId,
    /// Current cell.  Single owner; every change goes through
    /// `GridWorld::move_agent` so world occupancy stays in sync.
    pub pos: GridPos,

    pub state:   RoombaState,
    pub battery: Battery,

    /// Count of actual position changes (metrics).
    pub movements: u64,

    pub visits:   VisitLog,
    pub chargers: ChargerRegistry,

    /// Cached search result not yet consumed.  Cleared whenever invalidated:
    /// goal reached, next step contested, or replanned.
    pub planned_path: Path,

    /// Cells vacated while traveling to a charger (LIFO), replayed to
    /// retrace the route afterward.
    pub return_stack: Vec<GridPos>,

    /// One-tick edge flag raised when the battery tops up.
    pub just_finished_charging: bool,
}

impl Roomba {
    /// Create a roomba at `start` with `home` as its assigned charger.
    ///
    /// Validation that `home` actually is a charger cell belongs to the
    /// simulation builder — it is a construction-time precondition, not a
    /// runtime error path.
    pub fn new(id: AgentId, start: GridPos, home: GridPos, params: EnergyParams) -> Self {
        Self {
            id,
            pos: start,
            state: RoombaState::Exploring,
            battery: Battery::full(params),
            movements: 0,
            visits: VisitLog::new(),
            chargers: ChargerRegistry::new(home),
            planned_path: Path::empty(),
            return_stack: Vec::new(),
            just_finished_charging: false,
        }
    }

    #[inline]
    pub fn is_charging(&self) -> bool {
        self.state == RoombaState::Charging
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.state == RoombaState::Depleted
    }
}
