//! Maze summary command

use std::path::Path;

use mazegraph_core::error::Result;

use super::helpers::{compact, load_maze};
use crate::cli::{Cli, OutputFormat};

/// Execute the info command
pub fn execute(cli: &Cli, maze_path: &Path) -> Result<()> {
    let loaded = load_maze(maze_path)?;
    let maze = &loaded.maze;
    let graph = &loaded.graph;
    let start = loaded.config.start();
    let end = loaded.config.end();

    match cli.format {
        OutputFormat::Human => {
            println!("{}x{} maze", maze.width(), maze.height());
            println!("  vertices: {}", graph.vertex_count());
            println!("  edges:    {}", graph.edge_count());
            if !cli.quiet {
                println!("  start:    {}", start);
                println!("  end:      {}", end);
                if let Some(algorithm) = loaded.config.run.algorithm {
                    println!("  run:      {}", algorithm);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "width": maze.width(),
                "height": maze.height(),
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "start": start,
                "end": end,
                "algorithm": loaded.config.run.algorithm,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H mazegraph=1 records=1 mode=info width={} height={} vertices={} edges={} start={} end={}",
                maze.width(),
                maze.height(),
                graph.vertex_count(),
                graph.edge_count(),
                compact(&start),
                compact(&end)
            );
        }
    }

    Ok(())
}
