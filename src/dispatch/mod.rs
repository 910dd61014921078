//! Merge request dispatch
//!
//! Two-phase pattern:
//! 1. Plan - build one `MergeRequestDraft` per target branch (pure, testable)
//! 2. Execute - send each draft in order, recording every outcome (effectful)

mod execute;
mod plan;

use async_trait::async_trait;

pub use execute::{DispatchReport, execute_dispatch, send_merge_request};
pub use plan::{
    DRAFT_PREFIX, DispatchPlan, READY_BRANCH, build_description, build_title,
    create_dispatch_plan, strip_ticket_ids, ticket_id,
};

use crate::types::{BranchOutcome, MergeRequestDraft};

/// Receives progress while a plan is executed
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called before the request for `draft` is sent
    async fn on_sending(&self, draft: &MergeRequestDraft);

    /// Called once the attempt for a branch has finished
    async fn on_outcome(&self, outcome: &BranchOutcome);
}

/// Progress callback that does nothing
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_sending(&self, _draft: &MergeRequestDraft) {}
    async fn on_outcome(&self, _outcome: &BranchOutcome) {}
}
