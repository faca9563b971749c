//! Stage 3: synthesis of the final Markdown report.
//!
//! Consumes the full accumulated context of both prior stages. The
//! instructions pin the report's section contract.

use tracing::info;

use crate::error::Result;
use crate::llm::ReasoningService;
use crate::review::prompts::{CHIEF_REVIEWER, FINAL_REPORT_INSTRUCTIONS};
use crate::review::types::StageContext;

pub async fn run_final_report(
    service: &dyn ReasoningService,
    context: &StageContext,
) -> Result<String> {
    println!("\n{}", "=".repeat(80));
    println!("STAGE 3: Final Report Synthesis");
    println!("{}", "=".repeat(80));

    let prompt = format!("{FINAL_REPORT_INSTRUCTIONS}\n\n{}", context.render());

    info!(prior_stages = context.len(), "running final report synthesis");
    service
        .complete(&CHIEF_REVIEWER.system_prompt(), &prompt)
        .await
}
