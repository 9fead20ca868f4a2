//! Edge weight lookup command

use std::path::Path;

use mazegraph_core::error::Result;
use mazegraph_core::Juncture;

use super::helpers::{compact, load_maze};
use crate::cli::{Cli, OutputFormat};

/// Execute the weight command
///
/// A missing edge is not an error; junctures outside the maze are.
pub fn execute(cli: &Cli, maze_path: &Path, from: Juncture, to: Juncture) -> Result<()> {
    let loaded = load_maze(maze_path)?;
    let weight = loaded.graph.get_weight(&from, &to)?;

    match cli.format {
        OutputFormat::Human => match weight {
            Some(w) => println!("{} -> {}: {}", from, to, w),
            None => println!("{} -> {}: none", from, to),
        },
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "weight": weight,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let value = weight.map_or_else(|| "none".to_string(), |w| w.to_string());
            println!("H mazegraph=1 records=1 mode=weight");
            println!("W {} {} {}", compact(&from), compact(&to), value);
        }
    }

    Ok(())
}
