//! Domain worlds: each pairs a [`wayfind_kernel::SearchProblem`] with its
//! heuristic registry.

pub mod disk_stack;
pub mod grid_maze;
pub mod sliding_tile;

/// Every heuristic name some world registers.
///
/// Each world registry lists these as foreign names, so a heuristic asked
/// for on the wrong world runs as the null heuristic instead of failing.
pub const HEURISTIC_NAMES: &[&str] = &[
    "null",
    "manhattan",
    "food",
    "misplaced",
    "misplaced_disks",
];
