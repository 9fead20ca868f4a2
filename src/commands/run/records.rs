use super::{RunReport, RunResult};
use crate::commands::helpers::compact;
use mazegraph_core::{Notification, SearchOutcome};

/// Output in records format
///
/// One header line, then one line per notification:
/// `B` begun, `V` visit, `C` concluded, `F` finalized, `P` path.
pub fn output_records(report: &RunReport<'_>) {
    let status = match report.result {
        Some(RunResult::Search(SearchOutcome::Concluded)) => "concluded",
        Some(RunResult::Search(SearchOutcome::Exhausted)) => "exhausted",
        Some(RunResult::Path(_)) => "ok",
        None => "error",
    };
    println!(
        "H mazegraph=1 records=1 mode={} from={} to={} events={} status={}",
        report.algorithm,
        compact(&report.from),
        compact(&report.to),
        report.events.len(),
        status
    );

    for event in report.events {
        match event {
            Notification::AlgorithmBegun { algorithm } => println!("B {}", algorithm),
            Notification::Visit { vertex } => println!("V {}", compact(vertex)),
            Notification::SearchConcluded => println!("C"),
            Notification::VertexFinalized { vertex, cost } => {
                println!("F {} {}", compact(vertex), cost)
            }
            Notification::ShortestPathComputed { path } => {
                let steps: Vec<String> = path.iter().map(compact).collect();
                let cost = match report.result {
                    Some(RunResult::Path(shortest)) => shortest.cost,
                    _ => 0,
                };
                println!("P {} cost={}", steps.join(" "), cost);
            }
        }
    }
}
