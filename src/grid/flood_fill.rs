//! Breadth-first cost propagation from the goal.

use std::collections::VecDeque;

use super::MazeGrid;

/// Summary of one flood fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloodFillStats {
    /// Cells reached from the goal without crossing a known wall
    pub reached: usize,
    /// Cells that fell back to Manhattan distance
    pub fallback: usize,
}

impl MazeGrid {
    /// Recompute every cell's cost from the current wall knowledge.
    ///
    /// BFS from the goal crosses only edges with no known wall; cells the
    /// fill never reaches take their Manhattan distance to the goal so the
    /// field stays finite everywhere.
    pub fn recompute_costs(&mut self) -> FloodFillStats {
        let cell_count = self.cell_count();
        let mut distances: Vec<Option<u32>> = vec![None; cell_count];
        let mut queue = VecDeque::with_capacity(cell_count);

        distances[self.index(self.goal)] = Some(0);
        queue.push_back((self.goal, 0u32));

        while let Some((current, cost)) = queue.pop_front() {
            for (_, next) in self.neighbors_without_known_wall(current) {
                let idx = self.index(next);
                if distances[idx].is_none() {
                    distances[idx] = Some(cost + 1);
                    queue.push_back((next, cost + 1));
                }
            }
        }

        let mut stats = FloodFillStats::default();
        for coord in self.cells() {
            let idx = self.index(coord);
            self.costs[idx] = match distances[idx] {
                Some(d) => {
                    stats.reached += 1;
                    d
                }
                None => {
                    stats.fallback += 1;
                    self.manhattan_to_goal(coord)
                }
            };
        }

        tracing::trace!(
            "Flood fill: {} cells reached, {} on Manhattan fallback",
            stats.reached,
            stats.fallback
        );
        stats
    }
}
