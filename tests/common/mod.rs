//! Shared test utilities

#![allow(dead_code)]

mod mock_api;
mod progress;

pub use mock_api::MockMergeRequestApi;
pub use progress::{ProgressEvent, RecordingProgress};

use mrsend::config::Config;

/// Link template used by test configs
pub const TEST_LINK: &str = "https://tracker.example.com/browse/";

/// Config with the given target branches and otherwise fixed values
pub fn test_config(branches: &[&str]) -> Config {
    Config {
        gitlab_url: "https://gitlab.example.com".to_string(),
        private_token: "test-token".to_string(),
        assignee_id: 7,
        project_id: 42,
        reviewer_ids: vec![11, 3, 5],
        target_branches: branches.iter().map(ToString::to_string).collect(),
        link_template: TEST_LINK.to_string(),
        user_prefix: "[J]".to_string(),
    }
}
