//! Navigator: owns the robot's position and drives the grid.

use tracing::{debug, info, warn};

use super::policy::select_target;
use super::state::{NavigationState, RunReport, SolveOutcome, StepOutcome};
use crate::core::{Direction, GridCoord};
use crate::devices::{Drive, WallSensor};
use crate::error::{Result, VyuhaError};
use crate::grid::MazeGrid;

/// Configuration for the navigator.
#[derive(Clone, Debug, Default)]
pub struct NavigatorConfig {
    /// Abort [`Navigator::solve`] after this many steps.
    ///
    /// The algorithm itself needs no bound; this guards against a sensor or
    /// drive that keeps reporting a maze inconsistent with reality.
    pub max_steps: Option<usize>,
}

/// Maze-solving robot controller for a single run.
pub struct Navigator<S, D> {
    config: NavigatorConfig,
    grid: MazeGrid,
    sensor: S,
    drive: D,
    position: GridCoord,
    state: NavigationState,
    steps: usize,
    trail: Vec<GridCoord>,
}

impl<S: WallSensor, D: Drive> Navigator<S, D> {
    /// Create a navigator standing on `start`.
    ///
    /// Starting on the goal yields an already solved run.
    ///
    /// # Panics
    /// If `start` is outside the grid.
    pub fn new(
        grid: MazeGrid,
        sensor: S,
        drive: D,
        start: GridCoord,
        config: NavigatorConfig,
    ) -> Self {
        assert!(
            grid.contains(start),
            "start {} is outside a {}x{} maze",
            start,
            grid.size(),
            grid.size()
        );
        let state = if start == grid.goal() {
            NavigationState::Solved
        } else {
            NavigationState::Running
        };
        Self {
            config,
            grid,
            sensor,
            drive,
            position: start,
            state,
            steps: 0,
            trail: vec![start],
        }
    }

    /// Current cell.
    #[inline]
    pub fn position(&self) -> GridCoord {
        self.position
    }

    /// Current run state.
    #[inline]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Completed steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Maze knowledge gathered so far.
    #[inline]
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Every cell occupied, start first.
    pub fn trail(&self) -> &[GridCoord] {
        &self.trail
    }

    /// Sensing collaborator.
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Actuation collaborator.
    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// One sense–plan–act iteration.
    ///
    /// Errors from the collaborators propagate unchanged and leave the
    /// position untouched. Calling this after a terminal outcome returns
    /// [`VyuhaError::RunFinished`].
    pub fn run_step(&mut self) -> Result<StepOutcome> {
        if self.state.is_terminal() {
            return Err(VyuhaError::RunFinished(self.state.name()));
        }

        // Sense and update before any cost is read
        self.grid.mark_explored(self.position);
        let walls = self.sensor.scan(self.position)?;
        debug!("Scanned walls at {}: {}", self.position, walls);
        self.grid.record_walls(self.position, walls);
        self.grid.recompute_costs();

        let candidates: Vec<(Direction, GridCoord)> = self
            .grid
            .neighbors_without_known_wall(self.position)
            .collect();

        let Some((direction, target)) = select_target(&self.grid, &candidates) else {
            self.steps += 1;
            warn!("No available moves from {} - maze is unsolvable", self.position);
            self.state = NavigationState::Unsolvable;
            return Ok(StepOutcome::Stuck);
        };
        debug_assert_eq!(Direction::between(self.position, target), Some(direction));

        debug!(
            "Moving {} from {} to {} (cost {})",
            direction,
            self.position,
            target,
            self.grid.cost_at(target)
        );
        self.drive.move_one_cell(direction)?;
        self.steps += 1;
        self.position = target;
        self.grid.mark_explored(target);
        self.trail.push(target);

        if target == self.grid.goal() {
            info!("Goal {} reached after {} steps", target, self.steps);
            self.state = NavigationState::Solved;
            Ok(StepOutcome::GoalReached)
        } else {
            Ok(StepOutcome::Moved(target))
        }
    }

    /// Step until the goal is reached or no move is possible.
    pub fn solve(&mut self) -> Result<SolveOutcome> {
        self.solve_with(|_, _| {})
    }

    /// Like [`Self::solve`], calling `observer` after every step.
    pub fn solve_with<F>(&mut self, mut observer: F) -> Result<SolveOutcome>
    where
        F: FnMut(&Self, StepOutcome),
    {
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Ok(outcome);
            }
            if let Some(limit) = self.config.max_steps
                && self.steps >= limit
            {
                warn!(
                    "Step limit {} reached at {} without finishing",
                    limit, self.position
                );
                return Err(VyuhaError::StepLimit(limit));
            }
            let outcome = self.run_step()?;
            observer(self, outcome);
        }
    }

    /// Snapshot of the run for reporting.
    pub fn report(&self) -> RunReport {
        RunReport {
            outcome: self.state.outcome(),
            position: self.position,
            steps: self.steps,
            trail: self.trail.clone(),
            explored_cells: self.grid.explored_count(),
        }
    }

    /// Release the grid and collaborators.
    pub fn into_parts(self) -> (MazeGrid, S, D) {
        (self.grid, self.sensor, self.drive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Walls;
    use crate::devices::scripted::{RecordingDrive, ScriptedSensor};

    struct StalledDrive;

    impl Drive for StalledDrive {
        fn move_one_cell(&mut self, _direction: Direction) -> Result<()> {
            Err(VyuhaError::Drive("stalled".to_string()))
        }
    }

    fn navigator(
        size: usize,
        start: GridCoord,
        readings: Vec<Walls>,
    ) -> Navigator<ScriptedSensor, RecordingDrive> {
        Navigator::new(
            MazeGrid::new(size),
            ScriptedSensor::new(readings),
            RecordingDrive::new(),
            start,
            NavigatorConfig::default(),
        )
    }

    #[test]
    fn test_first_step_goes_north() {
        let mut nav = navigator(3, GridCoord::new(0, 0), vec![Walls::new(false, false, true, true)]);
        let outcome = nav.run_step().unwrap();
        assert_eq!(outcome, StepOutcome::Moved(GridCoord::new(0, 1)));
        assert_eq!(nav.drive().moves(), &[Direction::North]);
        assert!(nav.grid().is_explored(GridCoord::new(0, 0)));
        assert!(nav.grid().is_explored(GridCoord::new(0, 1)));
    }

    #[test]
    fn test_boxed_in_is_stuck() {
        let mut nav = navigator(3, GridCoord::new(0, 0), vec![Walls::ALL]);
        assert_eq!(nav.run_step().unwrap(), StepOutcome::Stuck);
        assert_eq!(nav.state(), NavigationState::Unsolvable);
        assert!(nav.drive().moves().is_empty());
        assert!(matches!(nav.run_step(), Err(VyuhaError::RunFinished(_))));
    }

    #[test]
    fn test_sensor_failure_keeps_position() {
        let mut nav = navigator(3, GridCoord::new(0, 0), vec![]);
        assert!(matches!(nav.run_step(), Err(VyuhaError::Sensor(_))));
        assert_eq!(nav.position(), GridCoord::new(0, 0));
        assert_eq!(nav.state(), NavigationState::Running);
    }

    #[test]
    fn test_drive_failure_is_not_a_step() {
        let sensor = ScriptedSensor::new(vec![Walls::new(false, false, true, true); 2]);
        let mut nav = Navigator::new(
            MazeGrid::new(3),
            sensor,
            StalledDrive,
            GridCoord::new(0, 0),
            NavigatorConfig { max_steps: Some(1) },
        );

        assert!(matches!(nav.run_step(), Err(VyuhaError::Drive(_))));
        assert_eq!(nav.position(), GridCoord::new(0, 0));
        assert_eq!(nav.steps(), 0);
        assert_eq!(nav.trail(), &[GridCoord::new(0, 0)]);
        assert_eq!(nav.state(), NavigationState::Running);
        assert_eq!(nav.sensor().remaining(), 1);

        // The limit is still available for a retry
        assert!(matches!(nav.solve(), Err(VyuhaError::Drive(_))));
        assert_eq!(nav.sensor().remaining(), 0);
    }

    #[test]
    fn test_step_limit() {
        let mut nav = Navigator::new(
            MazeGrid::new(9),
            ScriptedSensor::new(vec![Walls::NONE; 20]),
            RecordingDrive::new(),
            GridCoord::new(0, 0),
            NavigatorConfig { max_steps: Some(3) },
        );
        assert!(matches!(nav.solve(), Err(VyuhaError::StepLimit(3))));
        assert_eq!(nav.steps(), 3);
        assert_eq!(nav.trail().len(), 4);
    }

    #[test]
    fn test_start_on_goal_is_solved() {
        let mut nav = navigator(3, GridCoord::new(1, 1), vec![]);
        assert_eq!(nav.solve().unwrap(), SolveOutcome::Solved);
        assert_eq!(nav.steps(), 0);
    }

    #[test]
    fn test_observer_sees_every_step() {
        let readings = vec![
            Walls::new(false, false, true, true),
            Walls::new(false, false, false, true),
        ];
        let mut nav = navigator(3, GridCoord::new(0, 0), readings);
        let mut seen = Vec::new();
        let outcome = nav.solve_with(|_, step| seen.push(step)).unwrap();

        assert_eq!(outcome, SolveOutcome::Solved);
        assert_eq!(
            seen,
            vec![StepOutcome::Moved(GridCoord::new(0, 1)), StepOutcome::GoalReached]
        );
        let report = nav.report();
        assert_eq!(report.outcome, Some(SolveOutcome::Solved));
        assert_eq!(report.moves(), 2);
    }
}
