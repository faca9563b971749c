//! AI-powered GitHub repository quality review.
//!
//! Clones a repository into an ephemeral workspace, extracts structural
//! signals and README/LICENSE text into an inspection record, then runs a
//! three-stage reasoning pipeline over it to produce a Markdown report.

// CLI argument parsing
pub mod cli;

// Runtime configuration
pub mod config;

// Error taxonomy
pub mod error;

// Repository inspection (fetch, classify, extract)
pub mod inspect;

// Reasoning-service client
pub mod llm;

// Three-stage review pipeline
pub mod review;

pub use error::Error;
