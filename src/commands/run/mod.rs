//! Algorithm run command
//!
//! Loads a maze, attaches a recording observer and runs one algorithm. The
//! recorded notifications are printed even when the run fails, so an
//! unreachable Dijkstra target still shows which junctures were finalized.

mod human;
mod json;
mod records;

use std::rc::Rc;
use std::time::Instant;

use mazegraph_core::bail_usage;
use mazegraph_core::error::Result;
use mazegraph_core::graph::TracingObserver;
use mazegraph_core::{
    trace_time, AlgorithmKind, Juncture, Notification, NotificationLog, SearchOutcome,
    ShortestPath,
};

use super::helpers::load_maze;
use crate::cli::{Cli, OutputFormat, RunArgs};

/// What a successful run produced
pub enum RunResult {
    Search(SearchOutcome),
    Path(ShortestPath<Juncture>),
}

/// Everything needed to print a run
pub struct RunReport<'a> {
    pub algorithm: AlgorithmKind,
    pub from: Juncture,
    pub to: Juncture,
    pub events: &'a [Notification<Juncture>],
    pub result: Option<&'a RunResult>,
}

/// Execute the bfs, dfs, dijkstra or run command
pub fn execute(
    cli: &Cli,
    args: &RunArgs,
    algorithm: Option<AlgorithmKind>,
    start: Instant,
) -> Result<()> {
    let loaded = load_maze(&args.maze)?;

    let Some(algorithm) = algorithm.or(loaded.config.run.algorithm) else {
        bail_usage!("no algorithm given and the maze file has no [run] algorithm");
    };
    let from = args.from.unwrap_or_else(|| loaded.config.start());
    let to = args.to.unwrap_or_else(|| loaded.config.end());

    let mut graph = loaded.graph;
    let log = Rc::new(NotificationLog::<Juncture>::new());
    graph.add_observer(log.clone());
    graph.add_observer(Rc::new(TracingObserver));

    let outcome = match algorithm {
        AlgorithmKind::Bfs => graph.run_bfs(&from, &to).map(RunResult::Search),
        AlgorithmKind::Dfs => graph.run_dfs(&from, &to).map(RunResult::Search),
        AlgorithmKind::Dijkstra => graph.run_dijkstra(&from, &to).map(RunResult::Path),
    };
    trace_time!(start, "run_algorithm", algorithm = algorithm.as_str());

    let events = log.take();
    let report = RunReport {
        algorithm,
        from,
        to,
        events: &events,
        result: outcome.as_ref().ok(),
    };

    match cli.format {
        OutputFormat::Human => human::output_human(cli, &report),
        OutputFormat::Json => json::output_json(&report)?,
        OutputFormat::Records => records::output_records(&report),
    }

    outcome.map(|_| ())
}
