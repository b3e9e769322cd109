//! Navigation state machine states and outcomes.

use serde::Serialize;

use crate::core::GridCoord;

/// Result of a single sense–plan–act iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    /// Moved to a new, non-goal cell
    Moved(GridCoord),
    /// No neighbour reachable without crossing a known wall
    Stuck,
    /// Moved onto the goal cell
    GoalReached,
}

/// Terminal result of [`super::Navigator::solve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SolveOutcome {
    /// Goal reached
    Solved,
    /// Dead end under current wall knowledge
    Unsolvable,
}

/// Run state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NavigationState {
    /// Initial state; steps may be taken
    Running,
    /// Goal reached
    Solved,
    /// Dead end
    Unsolvable,
}

impl NavigationState {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        !matches!(self, NavigationState::Running)
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            NavigationState::Running => "Running",
            NavigationState::Solved => "Solved",
            NavigationState::Unsolvable => "Unsolvable",
        }
    }

    /// Terminal outcome, if any.
    pub fn outcome(&self) -> Option<SolveOutcome> {
        match self {
            NavigationState::Running => None,
            NavigationState::Solved => Some(SolveOutcome::Solved),
            NavigationState::Unsolvable => Some(SolveOutcome::Unsolvable),
        }
    }
}

/// What a finished (or interrupted) run hands back to its caller.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    /// Terminal outcome, `None` while still running
    pub outcome: Option<SolveOutcome>,
    /// Final robot cell
    pub position: GridCoord,
    /// Completed steps
    pub steps: usize,
    /// Every cell occupied, start first
    pub trail: Vec<GridCoord>,
    /// Number of explored cells
    pub explored_cells: usize,
}

impl RunReport {
    /// Moves taken (trail length minus the start cell).
    pub fn moves(&self) -> usize {
        self.trail.len().saturating_sub(1)
    }
}
