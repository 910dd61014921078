//! Dispatch execution - effectful operations
//!
//! Takes a `DispatchPlan` and sends every draft through a
//! `MergeRequestApi`, strictly one after another. A failed branch is
//! recorded and the loop moves on.

use crate::dispatch::ProgressCallback;
use crate::dispatch::plan::DispatchPlan;
use crate::platform::MergeRequestApi;
use crate::types::{BranchOutcome, DispatchOutcome, MergeRequestDraft};
use tracing::info;

/// Result of executing a plan
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// One entry per attempted branch, in dispatch order
    pub outcomes: Vec<BranchOutcome>,
}

impl DispatchReport {
    /// Branches whose merge request was created
    pub fn created(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.outcome.is_created())
            .map(|o| o.target_branch.as_str())
            .collect()
    }

    /// Branches whose attempt failed
    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.outcome.is_created())
            .map(|o| o.target_branch.as_str())
            .collect()
    }

    /// Check if every attempt succeeded
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.outcome.is_created())
    }
}

/// Send one draft and capture the result; never fails
pub async fn send_merge_request(
    api: &dyn MergeRequestApi,
    draft: &MergeRequestDraft,
) -> BranchOutcome {
    let outcome = match api.create_merge_request(draft).await {
        Ok(()) => {
            info!(target_branch = %draft.target_branch, "merge request created");
            DispatchOutcome::Created
        }
        Err(e) => {
            info!(target_branch = %draft.target_branch, error = %e, "merge request failed");
            DispatchOutcome::Failed(e)
        }
    };

    BranchOutcome {
        target_branch: draft.target_branch.clone(),
        outcome,
    }
}

/// Execute the dispatch plan (EFFECTFUL)
///
/// Every draft gets exactly one attempt, awaited before the next one starts.
pub async fn execute_dispatch(
    plan: &DispatchPlan,
    api: &dyn MergeRequestApi,
    progress: &dyn ProgressCallback,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    for draft in &plan.drafts {
        progress.on_sending(draft).await;
        let outcome = send_merge_request(api, draft).await;
        progress.on_outcome(&outcome).await;
        report.outcomes.push(outcome);
    }

    report
}
