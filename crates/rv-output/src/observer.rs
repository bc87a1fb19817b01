//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rv_agent::Fleet;
use rv_core::Tick;
use rv_grid::GridWorld;
use rv_sim::SimObserver;

use crate::row::{RoombaSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes roomba snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, world: &GridWorld, fleet: &Fleet) {
        let active = fleet.iter().filter(|r| !r.is_depleted()).count();
        let row = TickSummaryRow {
            tick:           tick.0,
            dirt_remaining: world.dirt_count() as u64,
            active_agents:  active as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, _world: &GridWorld, fleet: &Fleet) {
        let rows: Vec<RoombaSnapshotRow> = fleet
            .iter()
            .map(|r| RoombaSnapshotRow {
                agent_id:  r.id.0,
                tick:      tick.0,
                x:         r.pos.x,
                y:         r.pos.y,
                energy:    r.battery.level(),
                movements: r.movements,
                state:     r.state.to_string(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
