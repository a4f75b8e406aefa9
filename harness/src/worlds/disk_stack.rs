//! Three-peg disk stacking (Tower of Hanoi).
//!
//! Disks are non-zero integers; a bigger number is a bigger disk. Each peg
//! is listed bottom to top. The goal is every disk on the last peg.

use std::fmt;

use serde::Serialize;
use wayfind_kernel::{Cost, Heuristic, IllegalTransition, SearchProblem};
use wayfind_search::HeuristicRegistry;

/// Number of pegs.
pub const PEGS: usize = 3;

const LAST_PEG: usize = PEGS - 1;

/// Invalid starting layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiskLayoutError {
    #[error("disk size 0 is not allowed")]
    ZeroDisk,
    #[error("disk {disk} appears more than once")]
    Duplicate { disk: u8 },
    #[error("peg {peg} is not strictly decreasing from bottom to top")]
    NotDecreasing { peg: usize },
}

/// Disks on each peg, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pegs([Vec<u8>; PEGS]);

impl Pegs {
    #[must_use]
    pub fn peg(&self, index: usize) -> &[u8] {
        &self.0[index]
    }

    fn top(&self, index: usize) -> Option<u8> {
        self.0[index].last().copied()
    }
}

impl fmt::Display for Pegs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pegs: Vec<String> = self.0.iter().map(|p| format!("{p:?}")).collect();
        f.write_str(&pegs.join(" "))
    }
}

/// Move the top disk of peg `from` onto peg `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub from: u8,
    pub to: u8,
}

impl Move {
    /// Every ordered peg pair, in the order actions are offered.
    pub const ALL: [Self; 6] = [
        Self::new(0, 1),
        Self::new(0, 2),
        Self::new(1, 0),
        Self::new(1, 2),
        Self::new(2, 0),
        Self::new(2, 1),
    ];

    #[must_use]
    pub const fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// A disk-stacking instance.
#[derive(Debug, Clone)]
pub struct DiskStack {
    start: Pegs,
    goal: Vec<u8>,
}

impl DiskStack {
    /// # Errors
    ///
    /// Returns [`DiskLayoutError`] if a disk is zero, repeated, or sits on a
    /// smaller disk.
    pub fn new(pegs: [Vec<u8>; PEGS]) -> Result<Self, DiskLayoutError> {
        let mut goal: Vec<u8> = Vec::new();
        for (peg, disks) in pegs.iter().enumerate() {
            if disks.windows(2).any(|w| w[0] <= w[1]) {
                return Err(DiskLayoutError::NotDecreasing { peg });
            }
            for &disk in disks {
                if disk == 0 {
                    return Err(DiskLayoutError::ZeroDisk);
                }
                if goal.contains(&disk) {
                    return Err(DiskLayoutError::Duplicate { disk });
                }
                goal.push(disk);
            }
        }
        goal.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self {
            start: Pegs(pegs),
            goal,
        })
    }

    /// `disks` disks stacked on the first peg.
    #[must_use]
    pub fn tower(disks: u8) -> Self {
        let first: Vec<u8> = (1..=disks).rev().collect();
        Self {
            goal: first.clone(),
            start: Pegs([first, Vec::new(), Vec::new()]),
        }
    }

    /// Total number of disks.
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.goal.len()
    }

    fn legal(state: &Pegs, mv: Move) -> bool {
        let (from, to) = (usize::from(mv.from), usize::from(mv.to));
        if from >= PEGS || to >= PEGS || from == to {
            return false;
        }
        match (state.top(from), state.top(to)) {
            (Some(disk), Some(under)) => disk < under,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl SearchProblem for DiskStack {
    type State = Pegs;
    type Action = Move;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "disk_stack"
    }

    fn start_state(&self) -> Pegs {
        self.start.clone()
    }

    fn is_goal(&self, state: &Pegs) -> bool {
        state.0[LAST_PEG] == self.goal
    }

    fn actions(&self, state: &Pegs) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&mv| Self::legal(state, mv))
            .collect()
    }

    fn successor(&self, state: &Pegs, action: &Move) -> Result<Pegs, IllegalTransition> {
        if !Self::legal(state, *action) {
            return Err(IllegalTransition::new(self.problem_id(), state, action));
        }
        let mut next = state.clone();
        if let Some(disk) = next.0[usize::from(action.from)].pop() {
            next.0[usize::from(action.to)].push(disk);
        }
        Ok(next)
    }

    fn cost(&self, _state: &Pegs, _action: &Move) -> Cost {
        1
    }
}

/// Number of disks not yet on the last peg. Each needs at least one move.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedDisks;

impl Heuristic<DiskStack> for MisplacedDisks {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "misplaced_disks"
    }

    fn value(&self, state: &Pegs, _problem: &DiskStack) -> Cost {
        let off_goal: usize = state.0[..LAST_PEG].iter().map(Vec::len).sum();
        off_goal as Cost
    }
}

/// Heuristics for [`DiskStack`]: `null`, `misplaced_disks`.
#[must_use]
pub fn disk_stack_heuristics() -> HeuristicRegistry<DiskStack> {
    HeuristicRegistry::new()
        .with("misplaced_disks", || Box::new(MisplacedDisks))
        .with_foreign(super::HEURISTIC_NAMES)
}
