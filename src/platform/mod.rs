//! Merge request API backends
//!
//! The dispatcher only sees [`MergeRequestApi`]; [`GitLabService`] is the
//! real implementation.

mod gitlab;

pub use gitlab::GitLabService;

use crate::error::Result;
use crate::types::MergeRequestDraft;
use async_trait::async_trait;

/// Creates merge requests on a code hosting platform
#[async_trait]
pub trait MergeRequestApi: Send + Sync {
    /// Create one merge request.
    ///
    /// Succeeds only when the platform confirms creation; any other answer
    /// is an error.
    async fn create_merge_request(&self, draft: &MergeRequestDraft) -> Result<()>;
}
