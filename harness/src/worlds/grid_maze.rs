//! Grid maze world: position search and eat-all-food search.
//!
//! Layouts are text rows. `%` is a wall, `.` is food, `o` is super food,
//! `P` is the start and `G` is a ghost; every other character is open
//! floor. Super food counts as food for the eat-all search.
//!
//! The first text row is the top of the maze: internally `y` grows upward,
//! so row 0 is the bottom row. Cells outside the grid are walls.

use std::fmt;

use serde::Serialize;
use wayfind_kernel::{Cost, Heuristic, IllegalTransition, SearchProblem};
use wayfind_search::HeuristicRegistry;

/// Price quoted by [`SearchProblem::cost`] for a move into a wall.
pub const ILLEGAL_MOVE_COST: Cost = 999_999;

/// Default goal of [`PositionProblem::from_maze`]: the bottom-left inner
/// corner of a walled maze.
pub const DEFAULT_GOAL: Coord = Coord::new(1, 1);

/// A grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in direction `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn manhattan(self, other: Self) -> Cost {
        Cost::from(self.x.abs_diff(other.x)) + Cost::from(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A compass move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in the order actions are offered.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    const fn arrow(self) -> char {
        match self {
            Self::North => '^',
            Self::South => 'v',
            Self::East => '>',
            Self::West => '<',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

/// Layout parse failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("maze layout has no rows")]
    Empty,
    #[error("maze row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("maze layout is {width}x{height}, too large to index")]
    TooLarge { width: usize, height: usize },
    #[error("maze layout has no start cell 'P'")]
    MissingStart,
}

/// Walls, food and markers of one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    /// Row-major from the bottom row up.
    walls: Vec<bool>,
    /// Sorted. Includes super food.
    food: Vec<Coord>,
    /// Sorted.
    super_food: Vec<Coord>,
    start: Option<Coord>,
    ghosts: Vec<Coord>,
}

impl Maze {
    /// Parse a text layout, top row first.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError`] for an empty layout, rows of unequal length or
    /// dimensions that do not fit a coordinate.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        let Some(first) = rows.first() else {
            return Err(MazeError::Empty);
        };
        let width_cells = first.len();
        if width_cells == 0 {
            return Err(MazeError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width_cells {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width_cells,
                    found: cells.len(),
                });
            }
        }

        let too_large = || MazeError::TooLarge {
            width: width_cells,
            height: rows.len(),
        };
        let width = i32::try_from(width_cells).map_err(|_| too_large())?;
        let height = i32::try_from(rows.len()).map_err(|_| too_large())?;

        let mut maze = Self {
            width,
            height,
            walls: vec![false; width_cells * rows.len()],
            food: Vec::new(),
            super_food: Vec::new(),
            start: None,
            ghosts: Vec::new(),
        };
        // Text rows run top-down; flip so y grows upward.
        for (y, cells) in (0..height).rev().zip(&rows) {
            for (x, &cell) in (0..width).zip(cells) {
                let here = Coord::new(x, y);
                match cell {
                    '%' => {
                        let index = maze.index(here);
                        maze.walls[index] = true;
                    }
                    '.' => maze.food.push(here),
                    'o' => {
                        maze.food.push(here);
                        maze.super_food.push(here);
                    }
                    'P' => maze.start = Some(here),
                    'G' => maze.ghosts.push(here),
                    _ => {}
                }
            }
        }
        maze.food.sort_unstable();
        maze.super_food.sort_unstable();
        maze.ghosts.sort_unstable();
        Ok(maze)
    }

    /// An obstacle-free grid with no food and no start marker.
    #[must_use]
    pub fn open(width: u16, height: u16) -> Self {
        Self {
            width: i32::from(width),
            height: i32::from(height),
            walls: vec![false; usize::from(width) * usize::from(height)],
            food: Vec::new(),
            super_food: Vec::new(),
            start: None,
            ghosts: Vec::new(),
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The `P` cell, if the layout had one.
    #[must_use]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// Food cells, super food included, sorted.
    #[must_use]
    pub fn food(&self) -> &[Coord] {
        &self.food
    }

    fn contains(&self, c: Coord) -> bool {
        (0..self.width).contains(&c.x) && (0..self.height).contains(&c.y)
    }

    // Callers check `contains` first, so both coordinates are non-negative.
    #[allow(clippy::cast_sign_loss)]
    fn index(&self, c: Coord) -> usize {
        c.y as usize * self.width as usize + c.x as usize
    }

    /// Whether `c` is a wall. Cells off the grid are walls.
    #[must_use]
    pub fn is_wall(&self, c: Coord) -> bool {
        !self.contains(c) || self.walls[self.index(c)]
    }

    /// Moves from `c` that do not run into a wall, in [`Direction::ALL`]
    /// order.
    #[must_use]
    pub fn legal_moves(&self, c: Coord) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| !self.is_wall(c.step(dir)))
            .collect()
    }

    fn cell_char(&self, c: Coord) -> char {
        if self.is_wall(c) {
            '%'
        } else if self.start == Some(c) {
            'P'
        } else if self.ghosts.binary_search(&c).is_ok() {
            'G'
        } else if self.super_food.binary_search(&c).is_ok() {
            'o'
        } else if self.food.binary_search(&c).is_ok() {
            '.'
        } else {
            ' '
        }
    }

    fn render_with(&self, overlay: &[(Coord, char)]) -> String {
        let mut out = String::new();
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let here = Coord::new(x, y);
                let cell = overlay
                    .iter()
                    .rev()
                    .find(|(c, _)| *c == here)
                    .map_or_else(|| self.cell_char(here), |(_, ch)| *ch);
                out.push(cell);
            }
            out.push('\n');
        }
        out
    }

    /// Draw a plan from `start`: each visited cell shows the arrow of the
    /// move that entered it.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalTransition`] if the plan walks into a wall.
    pub fn render_plan(&self, start: Coord, plan: &[Direction]) -> Result<String, IllegalTransition> {
        let mut overlay = Vec::with_capacity(plan.len());
        let mut here = start;
        for &dir in plan {
            let next = here.step(dir);
            if self.is_wall(next) {
                return Err(IllegalTransition::new("grid_maze", &here, &dir));
            }
            overlay.push((next, dir.arrow()));
            here = next;
        }
        Ok(self.render_with(&overlay))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&[]))
    }
}

/// Reach one goal cell.
#[derive(Debug, Clone)]
pub struct PositionProblem {
    maze: Maze,
    start: Coord,
    goal: Coord,
}

impl PositionProblem {
    #[must_use]
    pub fn new(maze: Maze, start: Coord, goal: Coord) -> Self {
        Self { maze, start, goal }
    }

    /// Start at the maze's `P` cell and head for [`DEFAULT_GOAL`].
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MissingStart`] if the layout has no `P`.
    pub fn from_maze(maze: Maze) -> Result<Self, MazeError> {
        let start = maze.start().ok_or(MazeError::MissingStart)?;
        Ok(Self::new(maze, start, DEFAULT_GOAL))
    }

    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[must_use]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Coord {
        self.goal
    }
}

impl SearchProblem for PositionProblem {
    type State = Coord;
    type Action = Direction;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "grid_maze.position"
    }

    fn start_state(&self) -> Coord {
        self.start
    }

    fn is_goal(&self, state: &Coord) -> bool {
        *state == self.goal
    }

    fn actions(&self, state: &Coord) -> Vec<Direction> {
        self.maze.legal_moves(*state)
    }

    fn successor(&self, state: &Coord, action: &Direction) -> Result<Coord, IllegalTransition> {
        let next = state.step(*action);
        if self.maze.is_wall(next) {
            return Err(IllegalTransition::new(self.problem_id(), state, action));
        }
        Ok(next)
    }

    fn cost(&self, state: &Coord, action: &Direction) -> Cost {
        if self.maze.is_wall(state.step(*action)) {
            ILLEGAL_MOVE_COST
        } else {
            1
        }
    }
}

/// Position plus the food not yet eaten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FoodState {
    pub position: Coord,
    /// Sorted, so equal sets compare and hash equal.
    pub food: Vec<Coord>,
}

impl fmt::Display for FoodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} food_left={}", self.position, self.food.len())
    }
}

/// Eat every food cell.
#[derive(Debug, Clone)]
pub struct FoodProblem {
    maze: Maze,
    start: Coord,
}

impl FoodProblem {
    /// # Errors
    ///
    /// Returns [`MazeError::MissingStart`] if the layout has no `P`.
    pub fn new(maze: Maze) -> Result<Self, MazeError> {
        let start = maze.start().ok_or(MazeError::MissingStart)?;
        Ok(Self { maze, start })
    }

    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }
}

impl SearchProblem for FoodProblem {
    type State = FoodState;
    type Action = Direction;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "grid_maze.food"
    }

    fn start_state(&self) -> FoodState {
        let mut food = self.maze.food().to_vec();
        if let Ok(at) = food.binary_search(&self.start) {
            food.remove(at);
        }
        FoodState {
            position: self.start,
            food,
        }
    }

    fn is_goal(&self, state: &FoodState) -> bool {
        state.food.is_empty()
    }

    fn actions(&self, state: &FoodState) -> Vec<Direction> {
        self.maze.legal_moves(state.position)
    }

    fn successor(&self, state: &FoodState, action: &Direction) -> Result<FoodState, IllegalTransition> {
        let position = state.position.step(*action);
        if self.maze.is_wall(position) {
            return Err(IllegalTransition::new(self.problem_id(), state, action));
        }
        let mut food = state.food.clone();
        if let Ok(at) = food.binary_search(&position) {
            food.remove(at);
        }
        Ok(FoodState { position, food })
    }

    fn cost(&self, state: &FoodState, action: &Direction) -> Cost {
        if self.maze.is_wall(state.position.step(*action)) {
            ILLEGAL_MOVE_COST
        } else {
            1
        }
    }
}

/// Manhattan distance to the goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl Heuristic<PositionProblem> for ManhattanHeuristic {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "manhattan"
    }

    fn value(&self, state: &Coord, problem: &PositionProblem) -> Cost {
        state.manhattan(problem.goal())
    }
}

/// Manhattan distance to the farthest remaining food.
///
/// Every remaining food must be reached, so this never overestimates.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoodHeuristic;

impl Heuristic<FoodProblem> for FoodHeuristic {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "food"
    }

    fn value(&self, state: &FoodState, _problem: &FoodProblem) -> Cost {
        state
            .food
            .iter()
            .map(|&f| state.position.manhattan(f))
            .max()
            .unwrap_or(0)
    }
}

/// Heuristics for [`PositionProblem`]: `null`, `manhattan`.
#[must_use]
pub fn position_heuristics() -> HeuristicRegistry<PositionProblem> {
    HeuristicRegistry::new()
        .with("manhattan", || Box::new(ManhattanHeuristic))
        .with_foreign(super::HEURISTIC_NAMES)
}

/// Heuristics for [`FoodProblem`]: `null`, `food`.
#[must_use]
pub fn food_heuristics() -> HeuristicRegistry<FoodProblem> {
    HeuristicRegistry::new()
        .with("food", || Box::new(FoodHeuristic))
        .with_foreign(super::HEURISTIC_NAMES)
}
