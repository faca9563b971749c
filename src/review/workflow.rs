//! Sequential orchestration of the three review stages.
//!
//! The pipeline is an intentionally minimal linear chain:
//! `Created → Running(StructureAnalysis) → Running(DocumentationReview) →
//! Running(Synthesis) → Completed`, with `Failed` reachable from any
//! stage. Each stage consumes the accumulated outputs of all prior stages
//! plus its fixed instructions; one failure fails the whole run, with no
//! retries.

use std::sync::Arc;

use chrono::Local;
use tracing::{error, info};

use crate::inspect::RepositoryInspector;
use crate::llm::ReasoningService;
use crate::review::stage1_structure::run_structure_analysis;
use crate::review::stage2_docs::run_documentation_review;
use crate::review::stage3_report::run_final_report;
use crate::review::types::{ReviewReport, ReviewRun, RunState, StageKind};

pub struct ReviewPipeline {
    inspector: Arc<dyn RepositoryInspector>,
    service: Arc<dyn ReasoningService>,
}

impl ReviewPipeline {
    pub fn new(
        inspector: Arc<dyn RepositoryInspector>,
        service: Arc<dyn ReasoningService>,
    ) -> Self {
        Self { inspector, service }
    }

    /// Execute one run. The returned run is always in a terminal state:
    /// `Completed` with the synthesized report, or `Failed` carrying the
    /// stage that triggered the error.
    pub async fn run(&self, repository_url: &str) -> ReviewRun {
        let mut run = ReviewRun::new(repository_url);
        info!(run_id = %run.run_id, url = repository_url, "starting review run");

        for stage in StageKind::ALL {
            run.state = RunState::Running(stage);
            info!(run_id = %run.run_id, stage = %stage, "stage started");

            let result = match stage {
                StageKind::StructureAnalysis => {
                    let record = self.inspector.inspect(repository_url).await;
                    run_structure_analysis(self.service.as_ref(), &record).await
                }
                StageKind::DocumentationReview => {
                    run_documentation_review(self.service.as_ref(), &run.context).await
                }
                StageKind::Synthesis => {
                    run_final_report(self.service.as_ref(), &run.context).await
                }
            };

            match result {
                Ok(text) => {
                    info!(run_id = %run.run_id, stage = %stage, chars = text.len(), "stage completed");
                    run.context.push(stage, text);
                }
                Err(e) => {
                    error!(run_id = %run.run_id, stage = %stage, error = %e, "stage failed");
                    run.state = RunState::Failed { stage, error: e };
                    return run;
                }
            }
        }

        // The synthesis output is the final report.
        let markdown = run
            .context
            .outputs()
            .last()
            .map(|output| output.text.clone())
            .unwrap_or_default();

        run.state = RunState::Completed(ReviewReport {
            repository_url: repository_url.to_string(),
            markdown,
            generated_at: Local::now(),
        });
        info!(run_id = %run.run_id, "review run completed");
        run
    }
}
