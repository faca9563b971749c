//! Stage 2: documentation review.
//!
//! Consumes the structure-analysis output (which carries the README text)
//! from the accumulated context.

use tracing::info;

use crate::error::Result;
use crate::llm::ReasoningService;
use crate::review::prompts::{DOCUMENTATION_REVIEW_INSTRUCTIONS, DOCUMENTATION_SPECIALIST};
use crate::review::types::StageContext;

pub async fn run_documentation_review(
    service: &dyn ReasoningService,
    context: &StageContext,
) -> Result<String> {
    println!("\n{}", "=".repeat(80));
    println!("STAGE 2: Documentation Review");
    println!("{}", "=".repeat(80));

    let prompt = format!("{DOCUMENTATION_REVIEW_INSTRUCTIONS}\n\n{}", context.render());

    info!(prior_stages = context.len(), "running documentation review");
    service
        .complete(&DOCUMENTATION_SPECIALIST.system_prompt(), &prompt)
        .await
}
