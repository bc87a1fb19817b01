//! Integration tests for rv-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{RoombaSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> RoombaSnapshotRow {
        RoombaSnapshotRow {
            agent_id,
            tick,
            x: agent_id as i32 + 1,
            y: 1,
            energy: 100 - tick as u32,
            movements: tick,
            state: "exploring".to_owned(),
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, dirt_remaining: 12 - tick, active_agents: 2 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("roomba_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("roomba_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "tick", "x", "y", "energy", "movements", "state"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "dirt_remaining", "active_agents"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("roomba_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // agent_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[0][6], "exploring");
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3"); // tick
        assert_eq!(&read_rows[0][1], "9"); // dirt_remaining
        assert_eq!(&read_rows[0][2], "2"); // active_agents
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call must not fail
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn integration_full_sim_writes_expected_row_counts() {
        use rv_core::{GridPos, SimConfig};
        use rv_grid::GridWorldBuilder;
        use rv_nav::{BfsPathFinder, LeastVisitedPolicy};
        use rv_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let home = GridPos::new(1, 1);
        let mut b = GridWorldBuilder::new(6, 4);
        b.wall_border();
        b.charger(home);
        b.dirt(GridPos::new(3, 1));
        let world = b.build();

        let config = SimConfig {
            total_ticks: 6,
            seed: 1,
            output_interval_ticks: 2, // snapshots at ticks 0, 2, 4
        };
        let mut sim = SimBuilder::new(config, world, BfsPathFinder, LeastVisitedPolicy)
            .agent_at_home(home)
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        let mut writer = obs.into_writer();
        writer.finish().unwrap(); // already finished by on_sim_end; idempotent

        // 1 agent × 3 snapshot ticks.
        let mut rdr = csv::Reader::from_path(dir.path().join("roomba_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3);

        // One summary per tick.
        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 6);
        // The lone agent never depletes in 6 ticks.
        assert!(summaries.iter().all(|row| &row[2] == "1"));
    }
}
