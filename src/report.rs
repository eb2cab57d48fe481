//! Textual and JSON renderings of a [`SearchOutcome`].

use crate::parsed_types::State;
use crate::search::search_engines::{SearchEngineName, SearchOutcome};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Render a list of states as `[a, b, c]`.
fn format_states(states: &[State]) -> String {
    format!("[{}]", states.iter().join(", "))
}

/// The plain-text report: elapsed time in minutes (one per explored state),
/// the explored states and, on success, the path.
impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Success { explored, path } => write!(
                f,
                "\tTime elapsed:\n{} minute(s)\n\n\tExplored states:\n{}\n\n\tPath:\n{}\n\n",
                self.elapsed(),
                format_states(explored),
                format_states(path),
            ),
            SearchOutcome::Failed { explored } => write!(
                f,
                "Failed\n\n\nTime elapsed:\n{} minute(s)\n\n\nExplored states:\n{}\n\n",
                self.elapsed(),
                format_states(explored),
            ),
        }
    }
}

pub fn format_report(outcome: &SearchOutcome) -> String {
    outcome.to_string()
}

/// One search engine's outcome, as written into the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct EngineReport<'a> {
    pub engine: SearchEngineName,
    pub elapsed: usize,
    #[serde(flatten)]
    pub outcome: &'a SearchOutcome,
}

impl<'a> EngineReport<'a> {
    pub fn new(engine: SearchEngineName, outcome: &'a SearchOutcome) -> Self {
        Self {
            engine,
            elapsed: outcome.elapsed(),
            outcome,
        }
    }
}

/// Render the outcomes of several engines, in the given order, as one
/// document.
pub fn render(results: &[(SearchEngineName, SearchOutcome)], format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => results
            .iter()
            .map(|(engine, outcome)| format!("==== {} ====\n{}", engine, outcome))
            .join("\n\n"),
        ReportFormat::Json => {
            let reports: Vec<EngineReport> = results
                .iter()
                .map(|(engine, outcome)| EngineReport::new(*engine, outcome))
                .collect();
            // Plain data with string keys, serialization cannot fail.
            serde_json::to_string_pretty(&reports).unwrap_or_default()
        }
    }
}
