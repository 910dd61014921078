//! Progress callback that records what it is told

use async_trait::async_trait;
use mrsend::dispatch::ProgressCallback;
use mrsend::types::{BranchOutcome, MergeRequestDraft};
use std::sync::Mutex;

/// One progress notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// `on_sending` with the draft title
    Sending(String),
    /// `on_outcome` rendered as its console line
    Outcome(String),
}

/// Records every progress notification in order
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    /// Recorded events, in order
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_sending(&self, draft: &MergeRequestDraft) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Sending(draft.title.clone()));
    }

    async fn on_outcome(&self, outcome: &BranchOutcome) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Outcome(outcome.to_string()));
    }
}
