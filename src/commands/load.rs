//! Load command implementation

use super::common::CommandContext;
use crate::{ingest::SourceOrigin, service::LoadReport, RecordKind, Result};

/// Handle the load command
pub fn handle_load(ctx: &CommandContext, kind: RecordKind, as_json: bool) -> Result<()> {
    let report = ctx.service.load(kind)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", describe_report(&report));
    }

    Ok(())
}

/// One-line human summary of a load
pub fn describe_report(report: &LoadReport) -> String {
    let source = match report.origin {
        Some(SourceOrigin::Synthesized { rows }) => {
            format!(" (source synthesized with {} rows)", rows)
        }
        Some(SourceOrigin::Existing) | None => String::new(),
    };

    format!(
        "✓ Loaded {} {} records in {} ms{}",
        report.rows, report.kind, report.elapsed_ms, source
    )
}
