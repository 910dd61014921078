//! Core types for mrsend

use crate::error::Error;
use serde::Serialize;

/// Body of a GitLab "create merge request" call
///
/// One draft is built per target branch. Field order matches the JSON
/// payload sent to `POST /projects/:id/merge_requests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeRequestDraft {
    /// Branch containing the changes
    pub source_branch: String,
    /// Branch the merge request proposes to merge into
    pub target_branch: String,
    /// Merge request title (may carry the `Draft: ` prefix)
    pub title: String,
    /// Merge request description
    pub description: String,
    /// User the merge request is assigned to
    pub assignee_id: i64,
    /// Requested reviewers, in configuration order
    pub reviewer_ids: Vec<i64>,
    /// Squash commits on merge (always `true`)
    pub squash: bool,
}

/// Outcome of a single merge request attempt
#[derive(Debug)]
pub enum DispatchOutcome {
    /// GitLab answered `201 Created`
    Created,
    /// Serialization, transport or status failure
    Failed(Error),
}

impl DispatchOutcome {
    /// Whether the merge request was created
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Outcome recorded for one target branch
#[derive(Debug)]
pub struct BranchOutcome {
    /// Target branch the attempt was made for
    pub target_branch: String,
    /// What happened
    pub outcome: DispatchOutcome,
}

impl BranchOutcome {
    /// Prefix used on every console line about this branch
    pub fn log_prefix(&self) -> String {
        branch_prefix(&self.target_branch)
    }
}

impl std::fmt::Display for BranchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            DispatchOutcome::Created => write!(f, "{}merge request created", self.log_prefix()),
            DispatchOutcome::Failed(e) => write!(
                f,
                "{}failed to create merge request: {e}",
                self.log_prefix()
            ),
        }
    }
}

/// `|<branch>|` marker used on console lines
pub fn branch_prefix(target_branch: &str) -> String {
    format!("|{target_branch}|")
}
