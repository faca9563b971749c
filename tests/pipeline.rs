//! Review pipeline state-machine runs against scripted collaborators.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use repospector::error::{Error, Result};
use repospector::inspect::{InspectionRecord, RepositoryInspector, StructureFlags};
use repospector::llm::ReasoningService;
use repospector::review::{ReviewPipeline, RunState, StageKind};

/// Inspector returning a fixed record, success or error shaped.
struct FixedInspector {
    record: InspectionRecord,
}

#[async_trait]
impl RepositoryInspector for FixedInspector {
    async fn inspect(&self, _repository_url: &str) -> InspectionRecord {
        self.record.clone()
    }
}

/// Service that pops one scripted response per call and records each
/// prompt it receives.
struct ScriptedService {
    responses: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedService {
    fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReasoningService for ScriptedService {
    async fn complete(&self, _system_prompt: &str, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Service("script exhausted".to_string())))
    }
}

fn demo_record() -> InspectionRecord {
    InspectionRecord {
        error: None,
        readme_content: Some("# Demo\n\nA demo project.".to_string()),
        license_content: None,
        structure_analysis: Some(StructureFlags {
            has_readme: true,
            ..StructureFlags::default()
        }),
        metadata: None,
    }
}

fn pipeline(record: InspectionRecord, service: Arc<ScriptedService>) -> ReviewPipeline {
    ReviewPipeline::new(Arc::new(FixedInspector { record }), service)
}

#[tokio::test]
async fn run_completes_through_all_stages_in_order() {
    let service = Arc::new(ScriptedService::new(vec![
        Ok("structure notes".to_string()),
        Ok("doc notes".to_string()),
        Ok("# Repository Analysis Report\n\nfinal".to_string()),
    ]));
    let pipeline = pipeline(demo_record(), service.clone());

    let run = pipeline.run("https://github.com/example/demo").await;

    let report = run.report().expect("run should complete");
    assert_eq!(report.markdown, "# Repository Analysis Report\n\nfinal");
    assert_eq!(report.repository_url, "https://github.com/example/demo");

    let stages: Vec<StageKind> = run.context.outputs().iter().map(|o| o.stage).collect();
    assert_eq!(stages, StageKind::ALL.to_vec());
    assert_eq!(service.prompts().len(), 3);
}

#[tokio::test]
async fn later_stages_receive_all_prior_outputs() {
    let service = Arc::new(ScriptedService::new(vec![
        Ok("structure notes".to_string()),
        Ok("doc notes".to_string()),
        Ok("final".to_string()),
    ]));
    let pipeline = pipeline(demo_record(), service.clone());

    pipeline.run("https://github.com/example/demo").await;

    let prompts = service.prompts();
    // Stage 1 sees the inspection record, including the README text.
    assert!(prompts[0].contains("# Demo"));
    assert!(prompts[0].contains("\"has_readme\": true"));
    // Stage 2 sees stage 1's output; stage 3 sees both prior outputs.
    assert!(prompts[1].contains("structure notes"));
    assert!(!prompts[1].contains("doc notes"));
    assert!(prompts[2].contains("structure notes"));
    assert!(prompts[2].contains("doc notes"));
}

#[tokio::test]
async fn stage_failure_fails_the_whole_run() {
    let service = Arc::new(ScriptedService::new(vec![
        Ok("structure notes".to_string()),
        Err(Error::Service("model unavailable".to_string())),
    ]));
    let pipeline = pipeline(demo_record(), service.clone());

    let run = pipeline.run("https://github.com/example/demo").await;

    let (stage, error) = run.failure().expect("run should fail");
    assert_eq!(stage, StageKind::DocumentationReview);
    assert!(error.to_string().contains("model unavailable"));

    // No report, one completed stage, no further service calls.
    assert!(run.report().is_none());
    assert_eq!(run.context.len(), 1);
    assert_eq!(service.prompts().len(), 2);
}

#[tokio::test]
async fn failure_at_first_stage_leaves_empty_context() {
    let service = Arc::new(ScriptedService::new(vec![Err(Error::Service(
        "rejected".to_string(),
    ))]));
    let pipeline = pipeline(demo_record(), service);

    let run = pipeline.run("https://github.com/example/demo").await;

    let (stage, _) = run.failure().expect("run should fail");
    assert_eq!(stage, StageKind::StructureAnalysis);
    assert!(run.context.is_empty());
    assert!(matches!(run.state, RunState::Failed { .. }));
}

#[tokio::test]
async fn error_record_flows_into_the_first_stage() {
    let record =
        InspectionRecord::from_error(&Error::Clone("remote not found".to_string()));
    let service = Arc::new(ScriptedService::new(vec![
        Ok("could not inspect".to_string()),
        Ok("no documentation".to_string()),
        Ok("final".to_string()),
    ]));
    let pipeline = pipeline(record, service.clone());

    let run = pipeline.run("https://github.com/example/gone").await;

    // The run proceeds; the reviewer is told about the failure.
    assert!(run.report().is_some());
    assert!(service.prompts()[0].contains("Failed to clone repository: remote not found"));
}
