use super::{RunReport, RunResult};
use crate::cli::Cli;
use mazegraph_core::{Notification, SearchOutcome};

/// Output in human-readable format
pub fn output_human(cli: &Cli, report: &RunReport<'_>) {
    if !cli.quiet {
        println!("{} {} -> {}", report.algorithm, report.from, report.to);
    }

    for event in report.events {
        match event {
            Notification::AlgorithmBegun { algorithm } => println!("begin {}", algorithm),
            Notification::Visit { vertex } => println!("visit {}", vertex),
            Notification::SearchConcluded => println!("concluded"),
            Notification::VertexFinalized { vertex, cost } => {
                println!("finalize {} cost={}", vertex, cost)
            }
            Notification::ShortestPathComputed { path } => {
                let steps: Vec<String> = path.iter().map(|j| j.to_string()).collect();
                println!("path {}", steps.join(" -> "));
            }
        }
    }

    if cli.quiet {
        return;
    }
    match report.result {
        Some(RunResult::Search(SearchOutcome::Concluded)) => {
            println!("reached {}", report.to)
        }
        Some(RunResult::Search(SearchOutcome::Exhausted)) => {
            println!("{} is unreachable from {}", report.to, report.from)
        }
        Some(RunResult::Path(path)) => {
            println!("cost {} over {} hops", path.cost, path.hops())
        }
        None => {}
    }
}
