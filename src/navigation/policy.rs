//! Greedy move selection.

use crate::core::{Direction, GridCoord};
use crate::grid::MazeGrid;

/// Choose the next cell among `candidates`.
///
/// Unexplored candidates are considered exclusively whenever at least one
/// exists, even if an explored one is cheaper. Within that pool the lowest
/// [`MazeGrid::cost_at`] wins and ties go to the earliest candidate, so
/// callers must pass candidates in N, E, S, W order.
pub fn select_target(
    grid: &MazeGrid,
    candidates: &[(Direction, GridCoord)],
) -> Option<(Direction, GridCoord)> {
    let has_unexplored = candidates.iter().any(|&(_, c)| !grid.is_explored(c));

    // min_by_key returns the first of equal minima
    candidates
        .iter()
        .copied()
        .filter(|&(_, c)| !has_unexplored || !grid.is_explored(c))
        .min_by_key(|&(_, c)| grid.cost_at(c))
}
