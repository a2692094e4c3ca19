//! Property tests: paths on random maps are valid, never cut corners, and
//! uniform-cost search matches an exhaustive reference.

use proptest::prelude::*;
use trek_grid::{Cell, OccupancyGrid};
use trek_search::{HeuristicKind, SearchConfig, SearchEngine, SearchState};
use trek_test_utils::{assert_valid_path, optimal_cost, path_cost};

fn arb_grid() -> impl Strategy<Value = OccupancyGrid> {
    (3u32..14, 3u32..14).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::bool::weighted(0.3), (w * h) as usize).prop_map(
            move |bits| {
                let mut grid = OccupancyGrid::new(w, h).unwrap();
                for (i, blocked) in bits.into_iter().enumerate() {
                    if let Some(cell) = grid.cell_of(i) {
                        grid.set_obstacle(cell, blocked);
                    }
                }
                grid
            },
        )
    })
}

fn arb_config() -> impl Strategy<Value = SearchConfig> {
    (
        prop_oneof![Just(HeuristicKind::Manhattan), Just(HeuristicKind::Euclidean)],
        0u8..4,
        any::<bool>(),
    )
        .prop_map(|(heuristic, weight, diagonal)| {
            SearchConfig::default()
                .with_heuristic(heuristic)
                .with_weight(weight as f32)
                .with_diagonal(diagonal)
        })
}

proptest! {
    #[test]
    fn finished_paths_are_valid(
        grid in arb_grid(),
        config in arb_config(),
        sx in 0i32..14, sy in 0i32..14, gx in 0i32..14, gy in 0i32..14,
    ) {
        let (start, goal) = (Cell::new(sx, sy), Cell::new(gx, gy));
        let endpoints_open = grid.is_walkable(start) && grid.is_walkable(goal);
        let allow_diagonal = config.allow_diagonal;
        let mut engine = SearchEngine::with_grid(grid, config).unwrap();
        engine.start_search(start, goal);
        let state = engine.run(None);

        if !endpoints_open {
            prop_assert_eq!(state, SearchState::Failed);
            prop_assert_eq!(engine.pool_in_use(), 0);
            return Ok(());
        }
        prop_assert!(state.is_terminal());
        if state == SearchState::Finished {
            assert_valid_path(engine.grid(), engine.path(), start, goal, allow_diagonal);
            prop_assert!((engine.path_cost() - path_cost(engine.path())).abs() < 1e-3);
        } else {
            prop_assert!(engine.path().is_empty());
        }
    }

    #[test]
    fn uniform_cost_matches_exhaustive_search(
        grid in arb_grid(),
        diagonal in any::<bool>(),
        sx in 0i32..14, sy in 0i32..14, gx in 0i32..14, gy in 0i32..14,
    ) {
        let (start, goal) = (Cell::new(sx, sy), Cell::new(gx, gy));
        let expected = optimal_cost(&grid, start, goal, diagonal);
        let base = SearchConfig::default().with_diagonal(diagonal);
        let mut engine = SearchEngine::with_grid(grid, base.clone().with_weight(0.0)).unwrap();
        engine.start_search(start, goal);
        let state = engine.run(None);

        match expected {
            Some(cost) => {
                prop_assert_eq!(state, SearchState::Finished);
                prop_assert!((engine.path_cost() - cost).abs() < 1e-3,
                    "engine {} vs exhaustive {}", engine.path_cost(), cost);
            }
            None => prop_assert_eq!(state, SearchState::Failed),
        }

        // Other heuristics agree on reachability and never beat the optimum.
        for heuristic in [HeuristicKind::Manhattan, HeuristicKind::Euclidean] {
            engine.set_config(base.clone().with_heuristic(heuristic)).unwrap();
            engine.start_search(start, goal);
            prop_assert_eq!(engine.run(None), state);
            if let Some(cost) = expected {
                prop_assert!(engine.path_cost() >= cost - 1e-3);
            }
        }
    }

    #[test]
    fn axis_only_manhattan_is_optimal(
        grid in arb_grid(),
        sx in 0i32..14, sy in 0i32..14, gx in 0i32..14, gy in 0i32..14,
    ) {
        let (start, goal) = (Cell::new(sx, sy), Cell::new(gx, gy));
        let expected = optimal_cost(&grid, start, goal, false);
        let config = SearchConfig::default().with_diagonal(false);
        let mut engine = SearchEngine::with_grid(grid, config).unwrap();
        engine.start_search(start, goal);
        engine.run(None);
        if let Some(cost) = expected {
            prop_assert_eq!(engine.path_cost(), cost);
        }
    }
}
