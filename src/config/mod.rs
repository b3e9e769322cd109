//! Configuration loading for VyuhaNav.
//!
//! Loads everything from a single TOML file; every field has a default so
//! an empty file (or no file) is a valid configuration.
//!
//! ## Example TOML
//!
//! ```toml
//! [maze]
//! size = 9            # odd, >= 3
//! goal = [4, 4]       # defaults to the center cell
//! start = [0, 0]
//!
//! [navigation]
//! max_steps = 10000   # 0 = unbounded
//!
//! [simulation]
//! seed = 42           # 0 = OS entropy
//! extra_passages = 4  # defaults to size / 2
//! # maze_file = "mazes/classic.txt"
//!
//! [output]
//! svg_path = "output/run.svg"
//! show_steps = false
//! ```

mod defaults;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::{Result, VyuhaError};
use crate::navigation::NavigatorConfig;

/// Main configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VyuhaConfig {
    #[serde(default)]
    pub maze: MazeSection,
    #[serde(default)]
    pub navigation: NavigationSection,
    #[serde(default)]
    pub simulation: SimulationSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Maze geometry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MazeSection {
    /// Edge length in cells (default: 9)
    #[serde(default = "defaults::size")]
    pub size: usize,

    /// Goal cell as `[x, y]` (default: center)
    #[serde(default)]
    pub goal: Option<[i32; 2]>,

    /// Start cell as `[x, y]` (default: [0, 0])
    #[serde(default = "defaults::start")]
    pub start: [i32; 2],
}

impl Default for MazeSection {
    fn default() -> Self {
        Self {
            size: defaults::size(),
            goal: None,
            start: defaults::start(),
        }
    }
}

/// Navigator settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigationSection {
    /// Step limit for a run, 0 for none (default: 10000)
    #[serde(default = "defaults::max_steps")]
    pub max_steps: usize,
}

impl Default for NavigationSection {
    fn default() -> Self {
        Self {
            max_steps: defaults::max_steps(),
        }
    }
}

/// Simulated maze settings
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimulationSection {
    /// Maze generator seed, 0 for entropy (default: 0)
    #[serde(default = "defaults::seed")]
    pub seed: u64,

    /// Random openings added after generation (default: size / 2)
    #[serde(default)]
    pub extra_passages: Option<usize>,

    /// Use a fully open maze instead of a generated one
    #[serde(default)]
    pub open: bool,

    /// Load the maze drawing from this file instead of generating one
    #[serde(default)]
    pub maze_file: Option<String>,
}

/// Output configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OutputSection {
    /// Path to save the final SVG snapshot
    #[serde(default)]
    pub svg_path: Option<String>,

    /// Log an ASCII snapshot after every step
    #[serde(default)]
    pub show_steps: bool,
}

impl VyuhaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VyuhaError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string and validate
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: VyuhaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let size = self.maze.size;
        if size < 3 || size % 2 == 0 {
            return Err(VyuhaError::Config(format!(
                "maze.size must be odd and at least 3, got {}",
                size
            )));
        }
        let in_bounds = |[x, y]: [i32; 2]| x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size;
        if let Some(goal) = self.maze.goal
            && !in_bounds(goal)
        {
            return Err(VyuhaError::Config(format!(
                "maze.goal {:?} is outside a {}x{} maze",
                goal, size, size
            )));
        }
        if !in_bounds(self.maze.start) {
            return Err(VyuhaError::Config(format!(
                "maze.start {:?} is outside a {}x{} maze",
                self.maze.start, size, size
            )));
        }
        Ok(())
    }

    /// Goal cell, defaulting to the center.
    pub fn goal(&self) -> GridCoord {
        match self.maze.goal {
            Some([x, y]) => GridCoord::new(x, y),
            None => {
                let c = (self.maze.size / 2) as i32;
                GridCoord::new(c, c)
            }
        }
    }

    /// Start cell.
    pub fn start(&self) -> GridCoord {
        let [x, y] = self.maze.start;
        GridCoord::new(x, y)
    }

    /// Extra passages for the maze generator.
    pub fn extra_passages(&self) -> usize {
        self.simulation
            .extra_passages
            .unwrap_or(self.maze.size / 2)
    }

    /// Convert to the navigator's runtime config.
    pub fn navigator_config(&self) -> NavigatorConfig {
        NavigatorConfig {
            max_steps: (self.navigation.max_steps > 0).then_some(self.navigation.max_steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = VyuhaConfig::default();
        assert_eq!(config.maze.size, 9);
        assert_eq!(config.goal(), GridCoord::new(4, 4));
        assert_eq!(config.start(), GridCoord::new(0, 0));
        assert_eq!(config.extra_passages(), 4);
        assert_eq!(config.navigator_config().max_steps, Some(10_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = VyuhaConfig::from_toml("").unwrap();
        assert_eq!(config.maze.size, 9);
        assert!(!config.output.show_steps);
    }

    #[test]
    fn test_partial_toml() {
        let config = VyuhaConfig::from_toml(
            r#"
            [maze]
            size = 5
            goal = [4, 0]

            [navigation]
            max_steps = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.goal(), GridCoord::new(4, 0));
        assert_eq!(config.extra_passages(), 2);
        assert_eq!(config.navigator_config().max_steps, None);
    }

    #[test]
    fn test_even_size_rejected() {
        let err = VyuhaConfig::from_toml("[maze]\nsize = 8\n").unwrap_err();
        assert!(matches!(err, VyuhaError::Config(_)));
    }

    #[test]
    fn test_goal_out_of_bounds_rejected() {
        assert!(VyuhaConfig::from_toml("[maze]\nsize = 3\ngoal = [3, 1]\n").is_err());
        assert!(VyuhaConfig::from_toml("[maze]\nstart = [-1, 0]\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nseed = 42\nopen = true").unwrap();
        let config = VyuhaConfig::load(file.path()).unwrap();
        assert_eq!(config.simulation.seed, 42);
        assert!(config.simulation.open);
    }

    #[test]
    fn test_missing_file() {
        let err = VyuhaConfig::load(Path::new("/nonexistent/vyuha.toml")).unwrap_err();
        assert!(matches!(err, VyuhaError::Config(_)));
    }
}
