//! Data structures for review pipeline runs.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// One stage of the review pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageKind {
    StructureAnalysis,
    DocumentationReview,
    Synthesis,
}

impl StageKind {
    /// Execution order of the pipeline.
    pub const ALL: [StageKind; 3] = [
        StageKind::StructureAnalysis,
        StageKind::DocumentationReview,
        StageKind::Synthesis,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StageKind::StructureAnalysis => "Structure Analysis",
            StageKind::DocumentationReview => "Documentation Review",
            StageKind::Synthesis => "Synthesis",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Output of one completed stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageOutput {
    pub stage: StageKind,
    pub text: String,
}

/// Ordered, append-only accumulation of stage outputs within one run.
/// Discarded when the run ends.
#[derive(Debug, Clone, Default)]
pub struct StageContext {
    outputs: Vec<StageOutput>,
}

impl StageContext {
    pub fn push(&mut self, stage: StageKind, text: String) {
        self.outputs.push(StageOutput { stage, text });
    }

    pub fn outputs(&self) -> &[StageOutput] {
        &self.outputs
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Render all prior outputs as context sections for the next stage's
    /// prompt, in completion order.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for output in &self.outputs {
            rendered.push_str(&format!(
                "## Context from the {} stage\n\n{}\n\n",
                output.stage.title(),
                output.text
            ));
        }
        rendered
    }
}

/// The final synthesized report.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewReport {
    pub repository_url: String,
    pub markdown: String,
    pub generated_at: DateTime<Local>,
}

/// Lifecycle of one run. Both terminal states carry their payload.
#[derive(Debug)]
pub enum RunState {
    Created,
    Running(StageKind),
    Completed(ReviewReport),
    Failed { stage: StageKind, error: Error },
}

/// One pipeline run: identity, current state, and accumulated context.
#[derive(Debug)]
pub struct ReviewRun {
    pub run_id: Uuid,
    pub repository_url: String,
    pub state: RunState,
    pub context: StageContext,
}

impl ReviewRun {
    pub fn new(repository_url: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            repository_url: repository_url.into(),
            state: RunState::Created,
            context: StageContext::default(),
        }
    }

    pub fn report(&self) -> Option<&ReviewReport> {
        match &self.state {
            RunState::Completed(report) => Some(report),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<(StageKind, &Error)> {
        match &self.state {
            RunState::Failed { stage, error } => Some((*stage, error)),
            _ => None,
        }
    }
}
