//! Mock merge request API for testing

#![allow(dead_code)]

use async_trait::async_trait;
use mrsend::error::{Error, Result};
use mrsend::platform::MergeRequestApi;
use mrsend::types::MergeRequestDraft;
use std::collections::HashMap;
use std::sync::Mutex;

/// Recording mock for `MergeRequestApi`
///
/// Features:
/// - Call tracking for verification
/// - Error injection per target branch
pub struct MockMergeRequestApi {
    create_calls: Mutex<Vec<MergeRequestDraft>>,
    errors_by_branch: Mutex<HashMap<String, String>>,
}

impl MockMergeRequestApi {
    /// Create a mock that accepts every request
    pub fn new() -> Self {
        Self {
            create_calls: Mutex::new(Vec::new()),
            errors_by_branch: Mutex::new(HashMap::new()),
        }
    }

    // === Error injection methods ===

    /// Make requests targeting `branch` fail with `msg`
    pub fn fail_branch(&self, branch: &str, msg: &str) {
        self.errors_by_branch
            .lock()
            .unwrap()
            .insert(branch.to_string(), msg.to_string());
    }

    // === Call tracking ===

    /// Every draft passed to `create_merge_request`, in call order
    pub fn create_calls(&self) -> Vec<MergeRequestDraft> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Target branches requested, in call order
    pub fn called_branches(&self) -> Vec<String> {
        self.create_calls
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.target_branch.clone())
            .collect()
    }
}

#[async_trait]
impl MergeRequestApi for MockMergeRequestApi {
    async fn create_merge_request(&self, draft: &MergeRequestDraft) -> Result<()> {
        self.create_calls.lock().unwrap().push(draft.clone());

        if let Some(msg) = self.errors_by_branch.lock().unwrap().get(&draft.target_branch) {
            return Err(Error::Internal(msg.clone()));
        }
        Ok(())
    }
}
