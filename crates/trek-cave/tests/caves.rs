//! Generated caves are searchable grids.

use proptest::prelude::*;
use trek_cave::{smooth, smooth_n, CaveGenerator};
use trek_grid::OccupancyGrid;
use trek_test_utils::bordered_grid;

#[test]
fn smoothing_reduces_isolated_noise() {
    let mut cave = CaveGenerator::builder().seed(42).build().unwrap();
    let mut grid = OccupancyGrid::new(60, 40).unwrap();
    cave.generate(&mut grid, 47).unwrap();

    let lonely = |g: &OccupancyGrid| {
        g.blocked_cells()
            .filter(|&c| !g.is_border(c) && g.blocked_neighbour_count(c) == 0)
            .count()
    };
    let before = lonely(&grid);
    assert!(before > 0);
    smooth_n(&mut grid, 5);
    assert!(lonely(&grid) < before);
}

#[test]
fn carve_is_reproducible() {
    let build = || {
        CaveGenerator::builder()
            .seed(2024)
            .fill_percent(47)
            .smooth_passes(3)
            .build()
            .unwrap()
    };
    let (mut a, mut b) = (build(), build());
    let (mut ga, mut gb) = (bordered_grid(50, 50), bordered_grid(50, 50));
    assert_eq!(a.carve(&mut ga).unwrap(), b.carve(&mut gb).unwrap());
    assert_eq!(ga, gb);
}

proptest! {
    #[test]
    fn smoothing_fixed_points(w in 1u32..12, h in 1u32..12, blocked in any::<bool>()) {
        let mut grid = OccupancyGrid::new(w, h).unwrap();
        grid.fill(blocked);
        if blocked {
            prop_assert_eq!(smooth(&mut grid), 0);
            prop_assert_eq!(grid.blocked_count(), grid.cell_count());
        } else {
            smooth(&mut grid);
            // Cells at least two away from every edge see only open cells.
            for cell in grid.cells() {
                let (x, y) = (cell.x as u32, cell.y as u32);
                if x >= 2 && y >= 2 && x + 2 < w && y + 2 < h {
                    prop_assert!(grid.is_walkable(cell));
                }
            }
        }
    }

    #[test]
    fn generate_always_seals_the_border(
        seed in any::<u64>(), fill in 0u32..=100, w in 1u32..20, h in 1u32..20,
    ) {
        let mut cave = CaveGenerator::builder().seed(seed).build().unwrap();
        let mut grid = OccupancyGrid::new(w, h).unwrap();
        let blocked = cave.generate(&mut grid, fill).unwrap();
        prop_assert_eq!(blocked, grid.blocked_count());
        for cell in grid.cells().filter(|&c| grid.is_border(c)) {
            prop_assert!(grid.is_blocked(cell));
        }
    }
}
