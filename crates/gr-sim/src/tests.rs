//! Unit tests for gr-sim.

use gr_city::TrafficLevel;
use gr_core::Coord;
use gr_learn::Hyperparameters;

use crate::{ScenarioBuilder, ScenarioConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn quick_params() -> Hyperparameters {
    Hyperparameters { episodes: 300, ..Default::default() }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use gr_city::{CityError, NodeKind};
    use gr_learn::LearnError;

    use crate::SimError;

    #[test]
    fn shapes_destination() {
        let s = ScenarioBuilder::new(6, 6, Coord::new(1, 1), Coord::new(4, 3)).build().unwrap();
        assert_eq!(s.grid.kind(Coord::new(4, 3)), NodeKind::Destination);
        assert_eq!(s.grid.destination(), Some(Coord::new(4, 3)));
        assert!(s.grid.traffic_nodes().is_empty());
        assert_eq!(s.config.name, "scenario");
    }

    #[test]
    fn same_start_and_destination_rejected() {
        let c = Coord::new(2, 2);
        let err = ScenarioBuilder::new(6, 6, c, c).build().err().unwrap();
        assert!(matches!(err, SimError::SameStartAndDestination(n) if n == c));
    }

    #[test]
    fn perimeter_endpoints_rejected() {
        let err = ScenarioBuilder::new(6, 6, Coord::new(0, 3), Coord::new(3, 3))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::City(CityError::InvalidNode { .. })));

        let err = ScenarioBuilder::new(6, 6, Coord::new(2, 2), Coord::new(3, 5))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::City(CityError::InvalidNode { .. })));
    }

    #[test]
    fn too_small_rejected() {
        let err = ScenarioBuilder::new(3, 6, Coord::new(1, 1), Coord::new(1, 2))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::City(CityError::InvalidDimension { .. })));
    }

    #[test]
    fn bad_hyperparameters_rejected() {
        let err = ScenarioBuilder::new(6, 6, Coord::new(1, 1), Coord::new(4, 4))
            .hyperparameters(Hyperparameters { learning_rate: 2.0, ..Default::default() })
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Learn(LearnError::InvalidHyperparameter { .. })));
    }

    #[test]
    fn same_seed_same_traffic() {
        let build = |seed| {
            ScenarioBuilder::new(14, 12, Coord::new(1, 1), Coord::new(9, 8))
                .traffic(TrafficLevel::Heavy)
                .seed(seed)
                .build()
                .unwrap()
                .grid
        };
        let a = build(21);
        assert_eq!(a, build(21));
        assert!(!a.traffic_nodes().is_empty());
        assert_eq!(a.kind(Coord::new(9, 8)), NodeKind::Destination);
    }

    #[test]
    fn from_config_keeps_fields() {
        let mut cfg = ScenarioConfig::new("a", 8, 8, Coord::new(1, 1), Coord::new(6, 6));
        cfg.traffic = TrafficLevel::Light;
        cfg.seed = 4;
        let s = ScenarioBuilder::from_config(cfg.clone()).build().unwrap();
        assert_eq!(s.config, cfg);
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod compare {
    use super::*;
    use gr_city::mark_traffic;
    use gr_learn::NoopObserver;
    use gr_search::{AStarRouter, BfsRouter};

    use crate::{QLEARNING, RouteStatus};

    #[test]
    fn runs_all_three_methods() {
        let s = ScenarioBuilder::new(5, 5, Coord::new(1, 1), Coord::new(2, 2))
            .name("tiny")
            .seed(8)
            .build()
            .unwrap();
        let cmp = s.compare(&mut NoopObserver).unwrap();

        assert_eq!(cmp.scenario, "tiny");
        let methods: Vec<_> = cmp.outcomes.iter().map(|o| o.method).collect();
        assert_eq!(methods, ["bfs", "astar", QLEARNING]);

        for method in ["bfs", "astar"] {
            let o = cmp.outcome(method).unwrap();
            assert_eq!(o.status, RouteStatus::Reached);
            assert_eq!(o.edge_count(), Some(2));
        }
        assert_eq!(cmp.training.episodes, 1000);
        assert_eq!(cmp.outcome(QLEARNING).unwrap().status, RouteStatus::Reached);
    }

    #[test]
    fn walled_destination_is_no_path_for_bfs() {
        let dest = Coord::new(3, 3);
        let mut s = ScenarioBuilder::new(7, 7, Coord::new(1, 1), dest).build().unwrap();
        for n in s.grid.neighbors(dest) {
            mark_traffic(&mut s.grid, n).unwrap();
        }
        let o = s.run_router(&BfsRouter).unwrap();
        assert_eq!(o.status, RouteStatus::NoPath);
        assert_eq!(o.route, None);
        assert_eq!(o.edge_count(), None);
        assert_eq!(o.nodes_examined(), 0);
    }

    #[test]
    fn congested_start_stops_bfs_but_not_astar() {
        let start = Coord::new(1, 1);
        let mut s = ScenarioBuilder::new(6, 6, start, Coord::new(4, 4)).build().unwrap();
        mark_traffic(&mut s.grid, start).unwrap();

        assert_eq!(s.run_router(&BfsRouter).unwrap().status, RouteStatus::NoPath);
        let astar = s.run_router(&AStarRouter).unwrap();
        assert_eq!(astar.status, RouteStatus::Reached);
        assert_eq!(astar.edge_count(), Some(6));
    }

    #[test]
    fn qlearning_is_repeatable() {
        let s = ScenarioBuilder::new(6, 6, Coord::new(1, 1), Coord::new(4, 3))
            .traffic(TrafficLevel::Light)
            .seed(12)
            .hyperparameters(quick_params())
            .build()
            .unwrap();
        let (a, qa, ra) = s.run_qlearning(&mut NoopObserver).unwrap();
        let (b, qb, rb) = s.run_qlearning(&mut NoopObserver).unwrap();
        assert_eq!(qa, qb);
        assert_eq!(a.status, b.status);
        assert_eq!(a.route.map(|r| r.nodes), b.route.map(|r| r.nodes));
        assert_eq!(ra.total_steps, rb.total_steps);
    }
}

// ── Batch loader ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{SimError, load_scenarios_csv, load_scenarios_reader};

    const CSV: &[u8] = b"\
name,width,height,start_x,start_y,dest_x,dest_y,traffic,seed\n\
small,6,6,1,1,4,4,none,1\n\
rush,20,15,2,2,17,11,heavy,7\n\
quiet,10,10,1,8,8,1,L,3\n\
";

    #[test]
    fn loads_rows_in_order() {
        let s = load_scenarios_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s[0].name, "small");
        assert_eq!((s[1].width, s[1].height), (20, 15));
        assert_eq!(s[1].start, Coord::new(2, 2));
        assert_eq!(s[1].destination, Coord::new(17, 11));
        assert_eq!(s[1].traffic, TrafficLevel::Heavy);
        assert_eq!(s[1].seed, 7);
        assert_eq!(s[2].traffic, TrafficLevel::Light);
        assert_eq!(s[2].hyperparameters, Hyperparameters::default());
    }

    #[test]
    fn loaded_rows_build() {
        for cfg in load_scenarios_reader(Cursor::new(CSV)).unwrap() {
            ScenarioBuilder::from_config(cfg).build().unwrap();
        }
    }

    #[test]
    fn unknown_traffic_rejected() {
        let csv = b"name,width,height,start_x,start_y,dest_x,dest_y,traffic,seed\n\
                    x,6,6,1,1,4,4,gridlock,1\n";
        let err = load_scenarios_reader(Cursor::new(&csv[..])).unwrap_err();
        assert!(matches!(err, SimError::Parse(ref m) if m.contains("gridlock")), "{err}");
    }

    #[test]
    fn malformed_number_rejected() {
        let csv = b"name,width,height,start_x,start_y,dest_x,dest_y,traffic,seed\n\
                    x,six,6,1,1,4,4,none,1\n";
        assert!(matches!(
            load_scenarios_reader(Cursor::new(&csv[..])),
            Err(SimError::Parse(_))
        ));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV).unwrap();
        let s = load_scenarios_csv(file.path()).unwrap();
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scenarios_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
