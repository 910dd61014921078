//! CLI commands and console output

pub mod send;
pub mod style;

use anstream::println;
use async_trait::async_trait;
use mrsend::dispatch::ProgressCallback;
use mrsend::types::{BranchOutcome, DispatchOutcome, MergeRequestDraft};
use style::{Stylize, check, cross};

/// Prints the title before each request and one line per outcome
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_sending(&self, draft: &MergeRequestDraft) {
        println!("{}", draft.title.emphasis());
    }

    async fn on_outcome(&self, outcome: &BranchOutcome) {
        match outcome.outcome {
            DispatchOutcome::Created => println!("{} {}", outcome.success(), check()),
            DispatchOutcome::Failed(_) => println!("{} {}", outcome.warn(), cross()),
        }
    }
}
