//! CLI argument parsing for mazegraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mazegraph_core::Juncture;
pub use args::RunArgs;
pub use mazegraph_core::format::OutputFormat;
use parse::{parse_format, parse_juncture};

/// Mazegraph - observable BFS, DFS and Dijkstra over mazes
#[derive(Parser, Debug)]
#[command(name = "mazegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search from start to end
    Bfs(RunArgs),

    /// Depth-first search from start to end
    Dfs(RunArgs),

    /// Dijkstra shortest path from start to end
    Dijkstra(RunArgs),

    /// Run the algorithm named in the maze file's [run] section
    Run(RunArgs),

    /// Show maze dimensions and graph size
    Info {
        /// Maze description (TOML)
        maze: PathBuf,
    },

    /// Show the weight of the edge between two junctures
    Weight {
        /// Maze description (TOML)
        maze: PathBuf,

        /// Juncture the edge leaves, as x,y
        #[arg(value_parser = parse_juncture)]
        from: Juncture,

        /// Juncture the edge enters, as x,y
        #[arg(value_parser = parse_juncture)]
        to: Juncture,
    },
}
