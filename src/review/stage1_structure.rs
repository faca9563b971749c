//! Stage 1: repository structure analysis.
//!
//! Embeds the pretty-printed inspection record into the analyst's prompt.
//! An error record is passed through as-is; the instructions tell the
//! reviewer to report the failure instead of inventing findings.

use tracing::info;

use crate::error::{Error, Result};
use crate::inspect::InspectionRecord;
use crate::llm::ReasoningService;
use crate::review::prompts::{REPO_ANALYST, STRUCTURE_ANALYSIS_INSTRUCTIONS};

pub async fn run_structure_analysis(
    service: &dyn ReasoningService,
    record: &InspectionRecord,
) -> Result<String> {
    println!("\n{}", "=".repeat(80));
    println!("STAGE 1: Structure Analysis");
    println!("{}", "=".repeat(80));

    let record_json = record.to_json_pretty().map_err(|e| {
        Error::Unexpected(format!("failed to serialize inspection record: {e}"))
    })?;

    let prompt = format!(
        "{STRUCTURE_ANALYSIS_INSTRUCTIONS}\n\n# Inspection Record\n\n```json\n{record_json}\n```\n"
    );

    info!(
        record_error = record.is_error(),
        prompt_chars = prompt.len(),
        "running structure analysis"
    );
    service.complete(&REPO_ANALYST.system_prompt(), &prompt).await
}
