use super::{RunReport, RunResult};
use mazegraph_core::error::Result;

/// Output in JSON format
pub fn output_json(report: &RunReport<'_>) -> Result<()> {
    let mut output = serde_json::json!({
        "algorithm": report.algorithm,
        "from": report.from,
        "to": report.to,
        "events": report.events,
    });

    if let Some(obj) = output.as_object_mut() {
        match report.result {
            Some(RunResult::Search(outcome)) => {
                obj.insert("outcome".to_string(), serde_json::to_value(outcome)?);
            }
            Some(RunResult::Path(path)) => {
                obj.insert("path".to_string(), serde_json::to_value(&path.vertices)?);
                obj.insert("cost".to_string(), serde_json::json!(path.cost));
            }
            None => {}
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
