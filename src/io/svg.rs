//! SVG snapshot of a run.
//!
//! Renders the navigator's view of the maze:
//! - Ground-truth walls (light gray, simulation only)
//! - Known walls (black)
//! - Cost of every cell
//! - Explored cells (shaded)
//! - Trail, robot and goal

use std::fmt::Write;
use std::path::Path;

use crate::core::{Direction, GridCoord};
use crate::devices::sim::SimulatedMaze;
use crate::grid::MazeGrid;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Observed wall color
    pub known_wall: &'static str,
    /// Ground-truth wall color
    pub true_wall: &'static str,
    /// Explored cell fill
    pub explored: &'static str,
    /// Robot marker fill
    pub robot: &'static str,
    /// Goal cell fill
    pub goal: &'static str,
    /// Trail line color
    pub trail: &'static str,
    /// Cost label color
    pub text: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            known_wall: "#000000",
            true_wall: "#D3D3D3",
            explored: "#E4E4E4",
            robot: "#E04040",
            goal: "#60C060",
            trail: "#2222AA",
            text: "#333333",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per cell
    pub cell_size: f32,
    /// Wall stroke width in pixels
    pub wall_width: f32,
    /// Padding around the maze in pixels
    pub padding: f32,
    /// Print the cost in each cell
    pub show_costs: bool,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            wall_width: 3.0,
            padding: 20.0,
            show_costs: true,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG visualization builder
pub struct MazeSvg<'a> {
    config: SvgConfig,
    grid: &'a MazeGrid,
    ground_truth: Option<&'a SimulatedMaze>,
    robot: Option<GridCoord>,
    trail: Vec<GridCoord>,
    title: Option<String>,
}

impl<'a> MazeSvg<'a> {
    /// Create a new SVG visualizer
    pub fn new(grid: &'a MazeGrid, config: SvgConfig) -> Self {
        Self {
            config,
            grid,
            ground_truth: None,
            robot: None,
            trail: Vec::new(),
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Draw the true maze underneath the known walls
    pub fn with_ground_truth(mut self, maze: &'a SimulatedMaze) -> Self {
        self.ground_truth = Some(maze);
        self
    }

    /// Mark the robot's cell
    pub fn with_robot(mut self, position: GridCoord) -> Self {
        self.robot = Some(position);
        self
    }

    /// Draw the path taken
    pub fn with_trail(mut self, trail: Vec<GridCoord>) -> Self {
        self.trail = trail;
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();
        let size = self.grid.size() as f32;
        let maze_px = size * self.config.cell_size;
        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let width = maze_px + 2.0 * padding;
        let height = maze_px + 2.0 * padding + title_height;

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();
        writeln!(
            &mut svg,
            r##"  <rect width="100%" height="100%" fill="#FFFFFF"/>"##
        )
        .unwrap();

        if let Some(ref title) = self.title {
            writeln!(
                &mut svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )
            .unwrap();
        }

        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )
        .unwrap();

        self.render_cells(&mut svg);
        if let Some(maze) = self.ground_truth {
            self.render_walls(&mut svg, "truth", self.config.colors.true_wall, |c, d| {
                maze.walls_at(c).has(d)
            });
        }
        self.render_walls(&mut svg, "known", self.config.colors.known_wall, |c, d| {
            self.grid.known_wall(c, d)
        });
        self.render_trail(&mut svg);
        self.render_robot(&mut svg);

        writeln!(&mut svg, "  </g>").unwrap();
        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    /// Top-left pixel of a cell; SVG y grows downward, maze y grows north.
    fn cell_origin(&self, coord: GridCoord) -> (f32, f32) {
        let cs = self.config.cell_size;
        let flipped_y = self.grid.size() as i32 - 1 - coord.y;
        (coord.x as f32 * cs, flipped_y as f32 * cs)
    }

    fn render_cells(&self, svg: &mut String) {
        let cs = self.config.cell_size;
        let colors = &self.config.colors;
        writeln!(svg, r#"    <g id="cells">"#).unwrap();

        for coord in self.grid.cells() {
            let (x, y) = self.cell_origin(coord);
            let fill = if coord == self.grid.goal() {
                Some(colors.goal)
            } else if self.grid.is_explored(coord) {
                Some(colors.explored)
            } else {
                None
            };
            if let Some(fill) = fill {
                writeln!(
                    svg,
                    r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                    x, y, cs, cs, fill
                )
                .unwrap();
            }
            if self.config.show_costs {
                writeln!(
                    svg,
                    r#"      <text x="{:.1}" y="{:.1}" font-family="monospace" font-size="{:.0}" text-anchor="middle" dominant-baseline="middle" fill="{}">{}</text>"#,
                    x + cs / 2.0,
                    y + cs / 2.0,
                    cs / 3.0,
                    colors.text,
                    self.grid.cost_at(coord)
                )
                .unwrap();
            }
        }

        writeln!(svg, "    </g>").unwrap();
    }

    /// Draw each cell's north and east edge, plus the south and west
    /// boundary, wherever `has_wall` says so.
    fn render_walls<F>(&self, svg: &mut String, id: &str, color: &str, has_wall: F)
    where
        F: Fn(GridCoord, Direction) -> bool,
    {
        let cs = self.config.cell_size;
        writeln!(
            svg,
            r#"    <g id="walls-{}" stroke="{}" stroke-width="{:.1}" stroke-linecap="square">"#,
            id, color, self.config.wall_width
        )
        .unwrap();

        for coord in self.grid.cells() {
            let (x, y) = self.cell_origin(coord);
            // South and west edges are drawn by the neighbour, except on the boundary
            let edges = Direction::ALL.into_iter().filter(|&d| match d {
                Direction::South => coord.y == 0,
                Direction::West => coord.x == 0,
                _ => true,
            });
            for d in edges {
                if !has_wall(coord, d) {
                    continue;
                }
                let (x1, y1, x2, y2) = match d {
                    Direction::North => (x, y, x + cs, y),
                    Direction::East => (x + cs, y, x + cs, y + cs),
                    Direction::South => (x, y + cs, x + cs, y + cs),
                    Direction::West => (x, y, x, y + cs),
                };
                writeln!(
                    svg,
                    r#"      <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
                    x1, y1, x2, y2
                )
                .unwrap();
            }
        }

        writeln!(svg, "    </g>").unwrap();
    }

    fn render_trail(&self, svg: &mut String) {
        if self.trail.len() < 2 {
            return;
        }
        let half = self.config.cell_size / 2.0;
        let points: Vec<String> = self
            .trail
            .iter()
            .map(|&c| {
                let (x, y) = self.cell_origin(c);
                format!("{:.1},{:.1}", x + half, y + half)
            })
            .collect();
        writeln!(
            svg,
            r#"    <polyline points="{}" fill="none" stroke="{}" stroke-width="2" stroke-opacity="0.7"/>"#,
            points.join(" "),
            self.config.colors.trail
        )
        .unwrap();
    }

    fn render_robot(&self, svg: &mut String) {
        let Some(robot) = self.robot else {
            return;
        };
        let cs = self.config.cell_size;
        let (x, y) = self.cell_origin(robot);
        writeln!(
            svg,
            r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" fill-opacity="0.8"/>"#,
            x + cs / 2.0,
            y + cs / 2.0,
            cs / 4.0,
            self.config.colors.robot
        )
        .unwrap();
    }

    /// Save SVG to file
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::write(path, self.render())
    }
}
