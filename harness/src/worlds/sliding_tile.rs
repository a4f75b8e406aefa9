//! Sliding-tile puzzle (8-puzzle, 15-puzzle, ...).
//!
//! Tiles are stored row-major; `0` is the blank. The goal layout is
//! `[0, 1, ..., n²-1]`. Actions name the direction the blank moves.

use std::fmt;

use serde::Serialize;
use wayfind_kernel::{Cost, Heuristic, IllegalTransition, SearchProblem};
use wayfind_search::HeuristicRegistry;

/// Invalid starting layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileLayoutError {
    #[error("expected a square layout of at least 4 tiles, got {len}")]
    NotSquare { len: usize },
    #[error("tile {tile} is out of range for a {side}x{side} board")]
    OutOfRange { tile: u8, side: usize },
    #[error("tile {tile} appears more than once")]
    Duplicate { tile: u8 },
}

/// One board configuration, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tiles(Vec<u8>);

impl Tiles {
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    fn blank(&self) -> usize {
        self.0.iter().position(|&t| t == 0).unwrap_or(0)
    }
}

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        };
        f.write_str(name)
    }
}

/// An `n x n` sliding-tile instance.
#[derive(Debug, Clone)]
pub struct NPuzzle {
    side: usize,
    start: Tiles,
}

impl NPuzzle {
    /// # Errors
    ///
    /// Returns [`TileLayoutError`] unless `layout` is a perfect square of
    /// length at least 4 holding each of `0..n²` exactly once.
    pub fn new(layout: &[u8]) -> Result<Self, TileLayoutError> {
        let len = layout.len();
        let side = (1..=len).take_while(|s| s * s <= len).last().unwrap_or(0);
        if len < 4 || side * side != len {
            return Err(TileLayoutError::NotSquare { len });
        }
        let mut seen = vec![false; len];
        for &tile in layout {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or(TileLayoutError::OutOfRange { tile, side })?;
            if *slot {
                return Err(TileLayoutError::Duplicate { tile });
            }
            *slot = true;
        }
        Ok(Self {
            side,
            start: Tiles(layout.to_vec()),
        })
    }

    /// Board width.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    fn slide_target(&self, blank: usize, slide: Slide) -> Option<usize> {
        let (row, col) = (blank / self.side, blank % self.side);
        match slide {
            Slide::Up if row > 0 => Some(blank - self.side),
            Slide::Down if row + 1 < self.side => Some(blank + self.side),
            Slide::Left if col > 0 => Some(blank - 1),
            Slide::Right if col + 1 < self.side => Some(blank + 1),
            _ => None,
        }
    }

    /// Render `tiles` as a grid, blank shown as `.`.
    #[must_use]
    pub fn render(&self, tiles: &Tiles) -> String {
        let width = (tiles.0.len() - 1).to_string().len();
        let mut out = String::new();
        for row in tiles.0.chunks(self.side) {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| {
                    if t == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{t:>width$}")
                    }
                })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out
    }
}

impl SearchProblem for NPuzzle {
    type State = Tiles;
    type Action = Slide;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "sliding_tile"
    }

    fn start_state(&self) -> Tiles {
        self.start.clone()
    }

    fn is_goal(&self, state: &Tiles) -> bool {
        state.0.iter().enumerate().all(|(i, &t)| usize::from(t) == i)
    }

    fn actions(&self, state: &Tiles) -> Vec<Slide> {
        let blank = state.blank();
        [Slide::Up, Slide::Down, Slide::Left, Slide::Right]
            .into_iter()
            .filter(|&s| self.slide_target(blank, s).is_some())
            .collect()
    }

    fn successor(&self, state: &Tiles, action: &Slide) -> Result<Tiles, IllegalTransition> {
        let blank = state.blank();
        let target = self
            .slide_target(blank, *action)
            .ok_or_else(|| IllegalTransition::new(self.problem_id(), state, action))?;
        let mut next = state.0.clone();
        next.swap(blank, target);
        Ok(Tiles(next))
    }

    fn cost(&self, _state: &Tiles, _action: &Slide) -> Cost {
        1
    }
}

/// Number of non-blank tiles out of place.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

impl Heuristic<NPuzzle> for MisplacedTiles {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "misplaced"
    }

    fn value(&self, state: &Tiles, _problem: &NPuzzle) -> Cost {
        let misplaced = state
            .0
            .iter()
            .enumerate()
            .filter(|&(i, &t)| t != 0 && usize::from(t) != i)
            .count();
        misplaced as Cost
    }
}

/// Sum of each non-blank tile's grid distance to its goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileManhattan;

impl Heuristic<NPuzzle> for TileManhattan {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "manhattan"
    }

    fn value(&self, state: &Tiles, problem: &NPuzzle) -> Cost {
        let side = problem.side();
        let total: usize = state
            .0
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != 0)
            .map(|(i, &t)| {
                let goal = usize::from(t);
                (i / side).abs_diff(goal / side) + (i % side).abs_diff(goal % side)
            })
            .sum();
        total as Cost
    }
}

/// Heuristics for [`NPuzzle`]: `null`, `misplaced`, `manhattan`.
#[must_use]
pub fn npuzzle_heuristics() -> HeuristicRegistry<NPuzzle> {
    HeuristicRegistry::new()
        .with("misplaced", || Box::new(MisplacedTiles))
        .with("manhattan", || Box::new(TileManhattan))
        .with_foreign(super::HEURISTIC_NAMES)
}
