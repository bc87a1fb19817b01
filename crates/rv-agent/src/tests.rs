//! Unit tests for rv-agent.

#[cfg(test)]
mod battery {
    use crate::{Battery, EnergyParams};

    #[test]
    fn defaults() {
        let p = EnergyParams::default();
        assert_eq!((p.max, p.low_battery, p.charge_rate), (100, 40, 5));
    }

    #[test]
    fn full_and_levels() {
        let b = Battery::full(EnergyParams::default());
        assert_eq!(b.level(), 100);
        assert!(b.is_full());
        assert!(!b.is_low());
        assert!(!b.is_empty());
    }

    #[test]
    fn low_threshold_is_inclusive() {
        let p = EnergyParams::default();
        assert!(!Battery::with_level(41, p).is_low());
        assert!(Battery::with_level(40, p).is_low());
        assert!(Battery::with_level(0, p).is_low());
    }

    #[test]
    fn drain_saturates_at_zero() {
        let mut b = Battery::with_level(1, EnergyParams::default());
        b.drain();
        assert!(b.is_empty());
        b.drain();
        assert_eq!(b.level(), 0);
    }

    #[test]
    fn charge_clamps_at_capacity() {
        let p = EnergyParams::default();
        let mut b = Battery::with_level(97, p);
        // 97 + 5 would overshoot; must clamp to 100 and report full.
        assert!(b.charge_step());
        assert_eq!(b.level(), 100);
    }

    #[test]
    fn charge_to_full_takes_ceiling_ticks() {
        let p = EnergyParams::default();
        let mut b = Battery::with_level(37, p);
        let mut steps = 0;
        while !b.charge_step() {
            steps += 1;
        }
        steps += 1; // the step that returned true
        // ceil((100 - 37) / 5) = 13
        assert_eq!(steps, 13);
        assert_eq!(b.level(), 100);
    }

    #[test]
    fn with_level_clamps() {
        let b = Battery::with_level(250, EnergyParams::default());
        assert_eq!(b.level(), 100);
    }
}

#[cfg(test)]
mod memory {
    use rv_core::GridPos;
    use rv_grid::GridWorldBuilder;

    use crate::{ChargerRegistry, VisitLog};

    fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }

    #[test]
    fn visit_log_counts() {
        let mut log = VisitLog::new();
        assert_eq!(log.count(p(1, 1)), 0);
        log.record(p(1, 1));
        log.record(p(1, 1));
        log.record(p(2, 1));
        assert_eq!(log.count(p(1, 1)), 2);
        assert_eq!(log.count(p(2, 1)), 1);
        assert_eq!(log.cells_visited(), 2);
    }

    #[test]
    fn registry_starts_with_home() {
        let reg = ChargerRegistry::new(p(3, 3));
        assert_eq!(reg.home(), p(3, 3));
        assert!(reg.knows(p(3, 3)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn observe_sees_cell_and_neighborhood() {
        let mut b = GridWorldBuilder::new(5, 5);
        b.charger(p(2, 2));
        b.charger(p(3, 2)); // adjacent to (2,2)
        b.charger(p(4, 4)); // out of observation range
        let w = b.build();

        let mut reg = ChargerRegistry::new(p(0, 0));
        reg.observe(&w, p(2, 2));
        assert!(reg.knows(p(2, 2)));
        assert!(reg.knows(p(3, 2)));
        assert!(!reg.knows(p(4, 4)));
        assert_eq!(reg.len(), 3); // home + 2 observed
    }

    #[test]
    fn observe_never_shrinks() {
        let mut b = GridWorldBuilder::new(5, 5);
        b.charger(p(2, 2));
        let w = b.build();

        let mut reg = ChargerRegistry::new(p(0, 0));
        reg.observe(&w, p(2, 2));
        let before = reg.len();
        // Observing empty space adds nothing and removes nothing.
        reg.observe(&w, p(4, 4));
        reg.observe(&w, p(2, 2));
        assert_eq!(reg.len(), before);
        assert!(reg.knows(p(2, 2)));
        assert!(reg.knows(p(0, 0)));
    }
}

#[cfg(test)]
mod fleet {
    use rv_core::{AgentId, GridPos};

    use crate::{EnergyParams, Fleet, Roomba, RoombaState};

    fn roomba(i: u32) -> Roomba {
        let home = GridPos::new(i as i32, 0);
        Roomba::new(AgentId(i), home, home, EnergyParams::default())
    }

    #[test]
    fn new_roomba_invariants() {
        let r = roomba(0);
        assert_eq!(r.state, RoombaState::Exploring);
        assert!(r.battery.is_full());
        assert!(r.chargers.knows(r.chargers.home()));
        assert!(r.planned_path.is_empty());
        assert!(r.return_stack.is_empty());
        assert!(!r.just_finished_charging);
        assert_eq!(r.movements, 0);
    }

    #[test]
    fn fleet_indexing() {
        let fleet = Fleet::new(vec![roomba(0), roomba(1), roomba(2)], 42);
        assert_eq!(fleet.len(), 3);
        let ids: Vec<AgentId> = fleet.ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
        assert_eq!(fleet.get(AgentId(1)).pos, GridPos::new(1, 0));
    }

    #[test]
    fn split_borrow_agent_and_rng() {
        let mut fleet = Fleet::new(vec![roomba(0), roomba(1)], 42);
        let (agent, rng) = fleet.agent_and_rng(AgentId(1));
        agent.movements += 1;
        let _: u32 = rng.gen_range(0..10);
        assert_eq!(fleet.get(AgentId(1)).movements, 1);
    }
}
