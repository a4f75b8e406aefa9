//! Shared helpers for wayfind benchmark suites.

use wayfind_harness::worlds::grid_maze::{Coord, Maze, PositionProblem};
use wayfind_harness::worlds::sliding_tile::NPuzzle;

/// A 26-move 8-puzzle instance, for the informed strategies.
pub const HARD_EIGHT_PUZZLE: [u8; 9] = [7, 2, 4, 5, 0, 6, 8, 3, 1];

/// A 4-move instance every strategy solves quickly.
pub const EASY_EIGHT_PUZZLE: [u8; 9] = [1, 4, 2, 3, 7, 5, 6, 8, 0];

/// `side x side` open grid, corner to corner.
#[must_use]
pub fn open_grid(side: u16) -> PositionProblem {
    let far = i32::from(side) - 1;
    PositionProblem::new(Maze::open(side, side), Coord::new(0, 0), Coord::new(far, far))
}

/// Serpentine maze of `rows` corridors, each `width` cells wide, joined at
/// alternating ends. The only path visits every open cell.
///
/// # Panics
///
/// Panics if the generated layout fails to parse (a bug in this helper).
#[must_use]
pub fn serpentine(rows: usize, width: usize) -> PositionProblem {
    let total_width = width + 2;
    let mut lines = vec!["%".repeat(total_width)];
    for row in 0..rows {
        lines.push(format!("%{}%", " ".repeat(width)));
        if row + 1 < rows {
            let gap_left = row % 2 == 1;
            let mut wall: Vec<char> = "%".repeat(total_width).chars().collect();
            wall[if gap_left { 1 } else { width }] = ' ';
            lines.push(wall.into_iter().collect());
        }
    }
    lines.push("%".repeat(total_width));
    // Start in the top-left corner.
    lines[1].replace_range(1..2, "P");

    let maze = Maze::parse(&lines.join("\n")).expect("generated layout parses");
    let start = maze.start().expect("generated layout has a start");
    // The last corridor ends on the side opposite its entry.
    let goal_x = if rows % 2 == 1 { width } else { 1 };
    let goal = Coord::new(i32::try_from(goal_x).unwrap_or(1), 1);
    PositionProblem::new(maze, start, goal)
}

/// Build an 8-puzzle from one of the constants above.
///
/// # Panics
///
/// Panics if `layout` is not a valid board.
#[must_use]
pub fn eight_puzzle(layout: &[u8; 9]) -> NPuzzle {
    NPuzzle::new(layout).expect("valid 8-puzzle layout")
}
