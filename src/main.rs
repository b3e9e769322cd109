//! VyuhaNav - flood-fill micromouse navigator
//!
//! Runs the navigator against a simulated maze (generated, fully open, or
//! loaded from a drawing) or against an operator at the console.
//!
//! ```text
//! vyuha-nav --size 9 --seed 42 --show
//! vyuha-nav --config vyuha.toml --svg run.svg
//! vyuha-nav --console
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, error, info};

use vyuha_nav::config::VyuhaConfig;
use vyuha_nav::devices::console::{ConsoleDrive, ConsoleSensor};
use vyuha_nav::devices::sim;
use vyuha_nav::io::{MazeSvg, SvgConfig, render_ascii};
use vyuha_nav::{
    Drive, MazeGrid, Navigator, Result, SimulatedMaze, SolveOutcome, StepOutcome, WallSensor,
};

const DEFAULT_CONFIG: &str = "vyuha.toml";

#[derive(Parser, Debug)]
#[command(author, version, about = "Flood-fill micromouse maze navigator")]
struct Args {
    /// TOML configuration file (default: ./vyuha.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maze edge length in cells (odd, >= 3)
    #[arg(short, long)]
    size: Option<usize>,

    /// Maze generator seed (0 = random)
    #[arg(long)]
    seed: Option<u64>,

    /// Use a maze with no interior walls
    #[arg(long)]
    open: bool,

    /// Ask an operator for walls instead of simulating
    #[arg(long)]
    console: bool,

    /// Give up after this many steps (0 = unbounded)
    #[arg(long)]
    max_steps: Option<usize>,

    /// Save a final SVG snapshot to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print the maze after every step
    #[arg(long)]
    show: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vyuha_nav=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    info!("VyuhaNav v{}", env!("CARGO_PKG_VERSION"));

    let size = config.maze.size;
    let start = config.start();
    let goal = config.goal();
    info!("Maze {}x{}, start {}, goal {}", size, size, start, goal);

    let maze = if args.console {
        None
    } else {
        Some(Arc::new(build_maze(&config)?))
    };

    let (sensor, drive): (Box<dyn WallSensor>, Box<dyn Drive>) = match maze {
        Some(ref maze) => {
            let (sensor, drive) = sim::devices(Arc::clone(maze), start);
            (Box::new(sensor), Box::new(drive))
        }
        None => {
            info!("Console mode: answer each wall prompt with y or n");
            (
                Box::new(ConsoleSensor::stdio()),
                Box::new(ConsoleDrive::stdio()),
            )
        }
    };

    let grid = MazeGrid::with_goal(size, goal);
    let mut navigator = Navigator::new(grid, sensor, drive, start, config.navigator_config());

    let show = config.output.show_steps;
    let outcome = navigator.solve_with(|nav, step| {
        if let StepOutcome::Moved(cell) = step {
            debug!("Step {}: at {}", nav.steps(), cell);
        }
        if show {
            println!(
                "Step {}\n{}",
                nav.steps(),
                render_ascii(nav.grid(), Some(nav.position()))
            );
        }
    })?;

    let report = navigator.report();
    info!(
        "Finished at {} after {} moves, {} of {} cells explored",
        report.position,
        report.moves(),
        report.explored_cells,
        navigator.grid().cell_count()
    );
    match outcome {
        SolveOutcome::Solved => println!("Maze solved!"),
        SolveOutcome::Unsolvable => println!("Maze unsolvable!"),
    }

    if let Some(ref path) = config.output.svg_path {
        let title = format!("{:?} in {} moves", outcome, report.moves());
        let mut svg = MazeSvg::new(navigator.grid(), SvgConfig::default())
            .with_title(title)
            .with_robot(report.position)
            .with_trail(report.trail);
        if let Some(ref maze) = maze {
            svg = svg.with_ground_truth(maze);
        }
        svg.save(Path::new(path))?;
        info!("Saved SVG snapshot to {}", path);
    }

    Ok(())
}

/// Config file (explicit, then `vyuha.toml`, then defaults) with CLI overrides.
fn load_config(args: &Args) -> Result<VyuhaConfig> {
    let mut config = if let Some(ref path) = args.config {
        info!("Loading configuration from {:?}", path);
        VyuhaConfig::load(path)?
    } else if Path::new(DEFAULT_CONFIG).exists() {
        info!("Loading configuration from {}", DEFAULT_CONFIG);
        VyuhaConfig::load(Path::new(DEFAULT_CONFIG))?
    } else {
        info!("Using default configuration");
        VyuhaConfig::default()
    };

    if let Some(size) = args.size {
        config.maze.size = size;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if args.open {
        config.simulation.open = true;
    }
    if let Some(max_steps) = args.max_steps {
        config.navigation.max_steps = max_steps;
    }
    if let Some(ref svg) = args.svg {
        config.output.svg_path = Some(svg.display().to_string());
    }
    if args.show {
        config.output.show_steps = true;
    }

    config.validate()?;
    Ok(config)
}

fn build_maze(config: &VyuhaConfig) -> Result<SimulatedMaze> {
    let size = config.maze.size;
    if let Some(ref file) = config.simulation.maze_file {
        info!("Loading maze drawing from {}", file);
        let maze = SimulatedMaze::load(Path::new(file))?;
        if maze.size() != size {
            return Err(vyuha_nav::VyuhaError::Config(format!(
                "maze file {} is {}x{} but maze.size is {}",
                file,
                maze.size(),
                maze.size(),
                size
            )));
        }
        return Ok(maze);
    }
    if config.simulation.open {
        info!("Using a fully open maze");
        return Ok(SimulatedMaze::fully_open(size));
    }
    Ok(SimulatedMaze::generate(
        size,
        config.simulation.seed,
        config.extra_passages(),
    ))
}
