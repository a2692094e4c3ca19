//! ASCII map fixtures.
//!
//! Maps are written one row per line:
//!
//! - `#` blocked
//! - `.` open
//! - `S` open, marks the start
//! - `G` open, marks the goal
//!
//! Leading and trailing blank lines and indentation are ignored so maps can
//! be written inline in raw string literals.

use trek_grid::{Cell, OccupancyGrid};

/// A parsed map with optional endpoints.
#[derive(Clone, Debug)]
pub struct AsciiMap {
    pub grid: OccupancyGrid,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
}

impl AsciiMap {
    pub fn start(&self) -> Cell {
        self.start.expect("map has no S")
    }

    pub fn goal(&self) -> Cell {
        self.goal.expect("map has no G")
    }
}

/// Parse an ASCII map. Panics on ragged rows or unknown characters.
pub fn parse_map(text: &str) -> AsciiMap {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!rows.is_empty(), "empty map");
    let width = rows[0].chars().count();
    let mut grid = OccupancyGrid::new(width as u32, rows.len() as u32).unwrap();
    let mut start = None;
    let mut goal = None;
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "ragged row {y}");
        for (x, ch) in row.chars().enumerate() {
            let cell = Cell::new(x as i32, y as i32);
            match ch {
                '#' => grid.set_obstacle(cell, true),
                '.' => {}
                'S' => start = Some(cell),
                'G' => goal = Some(cell),
                other => panic!("unknown map character {other:?} at {cell}"),
            }
        }
    }
    AsciiMap { grid, start, goal }
}

/// 5×5 room with a solid border; start (1,1), goal (3,3).
pub const OPEN_ROOM: &str = r"
    #####
    #S..#
    #...#
    #..G#
    #####
";

/// A wall with a single gap forces a detour.
pub const WALL_WITH_GAP: &str = r"
    #########
    #S..#...#
    #...#...#
    #.......#
    #...#..G#
    #########
";

/// Goal sealed off from the start.
pub const SEALED_GOAL: &str = r"
    #######
    #S....#
    #.....#
    #...###
    #...#G#
    #######
";

/// Goal walled into a pocket at the end of a corridor along the top row.
///
/// With Manhattan and diagonal moves the lower rows are first reached at
/// more than their best cost, so a flood from `S` improves open nodes.
pub const SEALED_POCKET: &str = r"
    ############
    #S......#G##
    #.......####
    #..........#
    #..........#
    ############
";

/// Two walls meeting at a corner that a diagonal must not cut.
pub const PINCHED_CORNER: &str = r"
    #####
    #S#.#
    #..G#
    #####
";
