use trek_grid::{Cell, OccupancyGrid, DIAGONAL_COST};

fn grid_from_rows(rows: &[&str]) -> OccupancyGrid {
    let mut g = OccupancyGrid::new(rows[0].len() as u32, rows.len() as u32).unwrap();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            g.set_obstacle(Cell::new(x as i32, y as i32), ch == '#');
        }
    }
    g
}

#[test]
fn wall_with_gap_allows_only_straight_passage() {
    let g = grid_from_rows(&["#.#", "...", "#.#"]);
    let through: Vec<_> = g
        .walkable_moves(Cell::new(1, 0), true)
        .iter()
        .map(|s| s.to)
        .collect();
    assert_eq!(through, vec![Cell::new(1, 1)]);
}

#[test]
fn diagonal_between_two_walls_is_rejected() {
    let g = grid_from_rows(&[".#", "#."]);
    assert!(g.walkable_moves(Cell::new(0, 0), true).is_empty());
    assert!(g.walkable_moves(Cell::new(1, 1), true).is_empty());
}

#[test]
fn open_corner_permits_diagonal_at_fixed_cost() {
    let g = grid_from_rows(&["..", ".."]);
    let diag: Vec<_> = g
        .walkable_moves(Cell::new(0, 0), true)
        .into_iter()
        .filter(|s| s.diagonal)
        .collect();
    assert_eq!(diag.len(), 1);
    assert_eq!(diag[0].to, Cell::new(1, 1));
    assert_eq!(diag[0].cost, DIAGONAL_COST);
}

#[test]
fn single_cell_grid_has_no_moves_and_full_wall_count() {
    let g = OccupancyGrid::new(1, 1).unwrap();
    assert!(g.walkable_moves(Cell::new(0, 0), true).is_empty());
    assert_eq!(g.blocked_neighbour_count(Cell::new(0, 0)), 8);
}
