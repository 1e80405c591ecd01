//! Dungeon and maze generator
//!
//! `dungeongen dungeon` writes a dungeon layout image; `dungeongen maze`
//! prints a text maze.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, error};
use serde::Serialize;

use dg_core::dungeon::{DistanceMetric, Dungeon, generate_dungeon};
use dg_core::maze::{carve_maze, render_maze, render_visited};
use dg_core::{DungeonConfig, GenRng, MazeConfig};
use dg_render::write_image;

/// Procedural dungeon and maze generator
#[derive(Parser, Debug)]
#[command(name = "dungeongen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dungeon layout and write it as an image
    Dungeon(DungeonArgs),
    /// Carve a maze and print it
    Maze(MazeArgs),
}

#[derive(Args, Debug)]
struct DungeonArgs {
    /// JSON configuration file; flags below override it
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of rooms to scatter
    #[arg(short = 'n', long = "rooms")]
    rooms: Option<usize>,

    /// Radius of the placement disk
    #[arg(short = 'r', long = "radius")]
    radius: Option<f64>,

    /// Output width in tiles
    #[arg(long = "width")]
    width: Option<usize>,

    /// Output height in tiles
    #[arg(long = "height")]
    height: Option<usize>,

    /// Mean room side length
    #[arg(long = "mean")]
    mean: Option<f64>,

    /// Standard deviation of room side length
    #[arg(long = "stddev")]
    stddev: Option<f64>,

    /// Rooms must exceed this on both sides to be kept
    #[arg(short = 't', long = "threshold")]
    threshold: Option<u32>,

    /// Distance used when linking rooms (literal or euclidean)
    #[arg(short = 'm', long = "metric")]
    metric: Option<DistanceMetric>,

    /// Separation restarts before giving up
    #[arg(long = "max-restarts")]
    max_restarts: Option<u32>,

    /// Separation nudges before giving up
    #[arg(long = "max-steps")]
    max_steps: Option<u64>,

    /// RNG seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Image file to write (.bmp or .png)
    #[arg(short = 'o', long = "output", default_value = "dungeon.bmp")]
    output: PathBuf,

    /// Also write rooms and links as JSON
    #[arg(long = "dump-json")]
    dump_json: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct MazeArgs {
    /// Maze width in cells
    #[arg(requires = "height")]
    width: Option<usize>,

    /// Maze height in cells
    height: Option<usize>,

    /// RNG seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Also print the visited map
    #[arg(long = "visited")]
    visited: bool,
}

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

impl DungeonArgs {
    fn to_config(&self) -> AppResult<DungeonConfig> {
        let mut config = match &self.config {
            Some(path) => DungeonConfig::from_json_file(path)?,
            None => DungeonConfig::default(),
        };
        if let Some(rooms) = self.rooms {
            config.room_count = rooms;
        }
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(mean) = self.mean {
            config.size_mean = mean;
        }
        if let Some(stddev) = self.stddev {
            config.size_stddev = stddev;
        }
        if let Some(threshold) = self.threshold {
            config.main_room_threshold = threshold;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        if let Some(max_restarts) = self.max_restarts {
            config.separation.max_restarts = max_restarts;
        }
        if let Some(max_steps) = self.max_steps {
            config.separation.max_steps = max_steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Layout dump written by `--dump-json`
#[derive(Serialize)]
struct LayoutDump<'a> {
    config: &'a DungeonConfig,
    #[serde(flatten)]
    dungeon: &'a Dungeon,
}

fn run_dungeon(args: &DungeonArgs) -> AppResult<()> {
    let config = args.to_config()?;
    let mut rng = GenRng::from_seed_or_entropy(config.seed);
    let dungeon = generate_dungeon(&config, &mut rng)?;

    write_image(&dungeon.grid, &args.output)?;

    if let Some(path) = &args.dump_json {
        let dump = LayoutDump {
            config: &config,
            dungeon: &dungeon,
        };
        fs::write(path, serde_json::to_string_pretty(&dump)?)?;
    }

    println!(
        "seed {}: {} main rooms, {} links -> {}",
        dungeon.seed,
        dungeon.main_rooms.len(),
        dungeon.edges.len(),
        args.output.display()
    );
    Ok(())
}

fn run_maze(args: &MazeArgs) -> AppResult<()> {
    let mut config = match (args.width, args.height) {
        (Some(width), Some(height)) => MazeConfig::new(width, height),
        _ => MazeConfig::default(),
    };
    config.seed = args.seed;
    config.validate()?;

    let mut rng = GenRng::from_seed_or_entropy(config.seed);
    let maze = carve_maze(&config, &mut rng)?;

    print!("{}", render_maze(&maze));
    if args.visited {
        print!("{}", render_visited(&maze));
    }
    Ok(())
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let result = match &cli.command {
        Command::Dungeon(args) => run_dungeon(args),
        Command::Maze(args) => run_maze(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("dungeongen: {err}");
            ExitCode::FAILURE
        }
    }
}
