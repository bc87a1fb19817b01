//! The backend trait all output formats implement.

use crate::{OutputResult, RoombaSnapshotRow, TickSummaryRow};

/// An output backend: receives rows, owns buffering, and flushes on
/// [`finish`](OutputWriter::finish).
pub trait OutputWriter {
    /// Write a batch of per-agent snapshot rows (one snapshot tick).
    fn write_snapshots(&mut self, rows: &[RoombaSnapshotRow]) -> OutputResult<()>;

    /// Write one tick's summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush buffers and close out the output.  Must be idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
