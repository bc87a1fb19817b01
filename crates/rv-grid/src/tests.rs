//! Unit tests for rv-grid.

#[cfg(test)]
mod helpers {
    use rv_core::GridPos;

    use crate::{GridWorld, GridWorldBuilder};

    /// 5×5 bounded world with a walled border — open interior is 3×3,
    /// x and y in 1..=3.
    pub fn walled_5x5() -> GridWorld {
        let mut b = GridWorldBuilder::new(5, 5);
        b.wall_border();
        b.build()
    }

    pub fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }
}

#[cfg(test)]
mod bounds_and_neighbors {
    use rv_core::GridPos;

    use super::helpers::{p, walled_5x5};
    use crate::{GridWorldBuilder, Topology};

    #[test]
    fn bounded_rejects_outside() {
        let w = walled_5x5();
        assert_eq!((w.width(), w.height()), (5, 5));
        assert!(w.contains(p(0, 0)));
        assert!(w.contains(p(4, 4)));
        assert!(!w.contains(p(5, 0)));
        assert!(!w.contains(p(-1, 2)));
        assert!(w.cell(p(-1, 2)).is_none());
    }

    #[test]
    fn neighbor_generation_order() {
        let w = walled_5x5();
        let n: Vec<GridPos> = w.neighbors4(p(2, 2)).collect();
        // +x, −x, +y, −y
        assert_eq!(n, vec![p(3, 2), p(1, 2), p(2, 3), p(2, 1)]);
    }

    #[test]
    fn border_neighbors_truncated_in_bounded() {
        let w = walled_5x5();
        let n: Vec<GridPos> = w.neighbors4(p(0, 0)).collect();
        assert_eq!(n, vec![p(1, 0), p(0, 1)]);
    }

    #[test]
    fn open_neighbors_skip_walls() {
        let w = walled_5x5();
        // (1, 1) touches the wall on two sides.
        let n: Vec<GridPos> = w.open_neighbors(p(1, 1)).collect();
        assert_eq!(n, vec![p(2, 1), p(1, 2)]);
    }

    #[test]
    fn toroidal_wraps_both_axes() {
        let mut b = GridWorldBuilder::new(4, 3);
        b.topology(Topology::Toroidal);
        let w = b.build();
        assert_eq!(w.topology(), Topology::Toroidal);

        assert_eq!(w.normalize(p(-1, 0)), Some(p(3, 0)));
        assert_eq!(w.normalize(p(4, 3)), Some(p(0, 0)));

        let n: Vec<GridPos> = w.neighbors4(p(0, 0)).collect();
        assert_eq!(n, vec![p(1, 0), p(3, 0), p(0, 1), p(0, 2)]);
    }
}

#[cfg(test)]
mod tags {
    use super::helpers::{p, walled_5x5};
    use crate::GridWorldBuilder;

    #[test]
    fn border_is_obstacle_interior_open() {
        let w = walled_5x5();
        assert!(w.is_obstacle(p(0, 0)));
        assert!(w.is_obstacle(p(4, 2)));
        assert!(w.is_open(p(1, 1)));
        assert!(w.is_open(p(3, 3)));
        // Outside the world is neither open nor an obstacle cell.
        assert!(!w.is_open(p(9, 9)));
        assert!(!w.is_obstacle(p(9, 9)));
    }

    #[test]
    fn dirt_lifecycle() {
        let mut b = GridWorldBuilder::new(5, 5);
        b.wall_border();
        b.dirt(p(2, 2));
        b.dirt(p(3, 1));
        let mut w = b.build();

        assert_eq!(w.dirt_count(), 2);
        assert!(w.has_dirt(p(2, 2)));

        assert!(w.remove_dirt(p(2, 2)));
        assert!(!w.has_dirt(p(2, 2)));
        assert_eq!(w.dirt_count(), 1);

        // Removing twice is a no-op.
        assert!(!w.remove_dirt(p(2, 2)));
        assert_eq!(w.dirt_count(), 1);
    }

    #[test]
    fn charger_and_dirt_may_share_a_cell() {
        let mut b = GridWorldBuilder::new(5, 5);
        b.charger(p(2, 2));
        b.dirt(p(2, 2));
        let w = b.build();
        assert!(w.has_charger(p(2, 2)));
        assert!(w.has_dirt(p(2, 2)));
    }

    #[test]
    fn obstacle_clears_other_tags() {
        let mut b = GridWorldBuilder::new(5, 5);
        b.dirt(p(2, 2));
        b.obstacle(p(2, 2));
        let w = b.build();
        assert!(w.is_obstacle(p(2, 2)));
        assert!(!w.has_dirt(p(2, 2)));
        assert_eq!(w.dirt_count(), 0);
    }
}

#[cfg(test)]
mod occupancy {
    use rv_core::AgentId;

    use super::helpers::{p, walled_5x5};
    use crate::GridError;

    #[test]
    fn place_and_move() {
        let mut w = walled_5x5();
        let a = AgentId(0);
        w.place_agent(a, p(1, 1)).unwrap();
        assert_eq!(w.agents_at(p(1, 1)), &[a]);

        w.move_agent(a, p(1, 1), p(2, 1)).unwrap();
        assert!(w.agents_at(p(1, 1)).is_empty());
        assert_eq!(w.agents_at(p(2, 1)), &[a]);
    }

    #[test]
    fn move_into_wall_rejected() {
        let mut w = walled_5x5();
        let a = AgentId(0);
        w.place_agent(a, p(1, 1)).unwrap();
        let err = w.move_agent(a, p(1, 1), p(0, 1)).unwrap_err();
        assert!(matches!(err, GridError::Blocked(_)));
        // Occupancy unchanged after the failed move.
        assert_eq!(w.agents_at(p(1, 1)), &[a]);
    }

    #[test]
    fn move_from_wrong_cell_rejected() {
        let mut w = walled_5x5();
        let a = AgentId(0);
        w.place_agent(a, p(1, 1)).unwrap();
        let err = w.move_agent(a, p(2, 2), p(2, 1)).unwrap_err();
        assert!(matches!(err, GridError::AgentNotAt { .. }));
    }

    #[test]
    fn co_occupancy_allowed_and_queried() {
        let mut w = walled_5x5();
        let a = AgentId(0);
        let b = AgentId(1);
        w.place_agent(a, p(2, 2)).unwrap();
        w.place_agent(b, p(2, 2)).unwrap();
        assert_eq!(w.agents_at(p(2, 2)).len(), 2);
        assert!(w.occupied_by_other(p(2, 2), a));
        assert!(w.occupied_by_other(p(2, 2), b));

        w.move_agent(b, p(2, 2), p(2, 3)).unwrap();
        assert!(!w.occupied_by_other(p(2, 2), a));
    }
}

#[cfg(test)]
mod scatter {
    use rv_core::SimRng;

    use crate::GridWorldBuilder;

    #[test]
    fn scatter_counts_exact_and_disjoint() {
        let mut rng = SimRng::new(7);
        let mut b = GridWorldBuilder::new(8, 8);
        b.wall_border();
        let obstacles = b.scatter_obstacles(5, &mut rng);
        let dirt = b.scatter_dirt(10, &mut rng);
        let chargers = b.scatter_chargers(2, &mut rng);

        assert_eq!(obstacles.len(), 5);
        assert_eq!(dirt.len(), 10);
        assert_eq!(chargers.len(), 2);

        // No position appears in two categories.
        for d in &dirt {
            assert!(!obstacles.contains(d));
            assert!(!chargers.contains(d));
        }

        let w = b.build();
        assert_eq!(w.dirt_count(), 10);
        for c in &chargers {
            assert!(w.has_charger(*c));
            assert!(w.is_open(*c));
        }
    }

    #[test]
    fn scatter_is_seed_deterministic() {
        let layout = |seed| {
            let mut rng = SimRng::new(seed);
            let mut b = GridWorldBuilder::new(8, 8);
            b.wall_border();
            b.scatter_obstacles(6, &mut rng);
            b.scatter_dirt(12, &mut rng)
        };
        assert_eq!(layout(42), layout(42));
        assert_ne!(layout(42), layout(43));
    }

    #[test]
    fn scatter_saturates_when_floor_runs_out() {
        let mut rng = SimRng::new(1);
        let mut b = GridWorldBuilder::new(3, 3);
        b.wall_border(); // one open cell left
        let placed = b.scatter_dirt(5, &mut rng);
        assert_eq!(placed.len(), 1);
    }
}
