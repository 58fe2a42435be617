use std::io::BufRead;

use anyhow::{Context, Result};
use shared::{error::ApiException, protocol::Command};
use store::Store;
use tracing::info;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub not_found: usize,
}

/// Validates and dispatches one JSON command per line. Stops at the first bad line.
pub fn replay_commands(store: &mut Store, reader: impl BufRead) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read command line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = serde_json::from_str(&line)
            .with_context(|| format!("malformed command on line {line_no}"))?;
        let kind = command.kind();
        let outcome = dashboard_api::submit(store, command)
            .map_err(ApiException::from)
            .with_context(|| format!("rejected {kind} on line {line_no}"))?;

        if outcome.is_not_found() {
            info!(line = line_no, kind, "target id not present; skipped");
            summary.not_found += 1;
        } else {
            summary.applied += 1;
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "tests/replay_tests.rs"]
mod tests;
