//! Command dispatch logic for mazegraph

use std::time::Instant;

use mazegraph_core::error::Result;
use mazegraph_core::AlgorithmKind;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{info, run, weight};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), "dispatch");

    match &cli.command {
        Commands::Bfs(args) => run::execute(cli, args, Some(AlgorithmKind::Bfs), start),
        Commands::Dfs(args) => run::execute(cli, args, Some(AlgorithmKind::Dfs), start),
        Commands::Dijkstra(args) => run::execute(cli, args, Some(AlgorithmKind::Dijkstra), start),
        Commands::Run(args) => run::execute(cli, args, None, start),
        Commands::Info { maze } => info::execute(cli, maze),
        Commands::Weight { maze, from, to } => weight::execute(cli, maze, *from, *to),
    }
}
