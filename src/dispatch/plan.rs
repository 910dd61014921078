//! Dispatch planning - pure functions for titles, descriptions and drafts
//!
//! No I/O happens here; everything is derived from the `Config`, the task
//! name and the source branch.

use crate::config::Config;
use crate::types::MergeRequestDraft;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Prefix marking a merge request as not ready for merge
pub const DRAFT_PREFIX: &str = "Draft: ";

/// The only target branch that gets a non-draft merge request
pub const READY_BRANCH: &str = "dev";

static TICKET_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ВВ-\d+").expect("ticket id pattern is valid"));

/// First ticket id (`ВВ-<digits>`) in a task name
pub fn ticket_id(task_name: &str) -> Option<&str> {
    TICKET_ID.find(task_name).map(|m| m.as_str())
}

/// Task name with every ticket id removed
pub fn strip_ticket_ids(task_name: &str) -> Cow<'_, str> {
    TICKET_ID.replace_all(task_name, "")
}

/// Build the merge request title for one target branch.
///
/// `"<prefix> <source><task without ticket ids>"`, with [`DRAFT_PREFIX`]
/// in front unless the target is [`READY_BRANCH`].
pub fn build_title(
    user_prefix: &str,
    source_branch: &str,
    task_name: &str,
    target_branch: &str,
) -> String {
    let title = format!(
        "{user_prefix} {source_branch}{}",
        strip_ticket_ids(task_name)
    );
    if target_branch == READY_BRANCH {
        title
    } else {
        format!("{DRAFT_PREFIX}{title}")
    }
}

/// Link template with the first ticket id appended, if there is one
pub fn build_description(link_template: &str, task_name: &str) -> String {
    match ticket_id(task_name) {
        Some(id) => format!("{link_template}{id}"),
        None => link_template.to_string(),
    }
}

/// Drafts to send, one per target branch, in configuration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchPlan {
    /// Ordered drafts
    pub drafts: Vec<MergeRequestDraft>,
}

impl DispatchPlan {
    /// Number of merge requests that will be attempted
    pub const fn len(&self) -> usize {
        self.drafts.len()
    }

    /// Check if there is nothing to send
    pub const fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

impl std::fmt::Display for DispatchPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, draft) in self.drafts.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            writeln!(f, "{} -> {}", draft.source_branch, draft.target_branch)?;
            writeln!(f, "  title: {}", draft.title)?;
            write!(f, "  description: {}", draft.description)?;
        }
        Ok(())
    }
}

/// Create the dispatch plan (PURE)
///
/// The description is the same for every branch; only the draft prefix of
/// the title depends on the target.
pub fn create_dispatch_plan(config: &Config, task_name: &str, source_branch: &str) -> DispatchPlan {
    let description = build_description(&config.link_template, task_name);

    let drafts = config
        .target_branches
        .iter()
        .map(|target| MergeRequestDraft {
            source_branch: source_branch.to_string(),
            target_branch: target.clone(),
            title: build_title(&config.user_prefix, source_branch, task_name, target),
            description: description.clone(),
            assignee_id: config.assignee_id,
            reviewer_ids: config.reviewer_ids.clone(),
            squash: true,
        })
        .collect();

    DispatchPlan { drafts }
}
