//! Configuration loaded from environment variables
//!
//! Variables may be seeded from a dotenv file (see [`load_env_file`]);
//! values already present in the process environment win.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// GitLab instance base URL
pub const GL_URL: &str = "GL_URL";
/// API auth token
pub const GL_PRIVATE_TOKEN: &str = "GL_PRIVATE_TOKEN";
/// Integer assignee id
pub const GL_ASSIGNEE_ID: &str = "GL_ASSIGNEE_ID";
/// Integer project id
pub const GL_PROJECT_ID: &str = "GL_PROJECT_ID";
/// Comma-separated integer reviewer ids
pub const GL_REVIEWER_IDS: &str = "GL_REVIEWER_IDS";
/// Comma-separated target branch names
pub const GL_TARGET_BRANCHES: &str = "GL_TARGET_BRANCHES";
/// Link template the ticket id is appended to
pub const METEOR_LINK: &str = "METEOR_LINK";
/// String prepended to every title
pub const USER_PREFIX: &str = "USER_PREFIX";

/// Default dotenv file looked up in the working directory
const DEFAULT_ENV_FILE: &str = ".env";

/// Run configuration, built once at startup and read-only afterwards
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// GitLab base URL, e.g. `https://gitlab.example.com`
    pub gitlab_url: String,
    /// Value sent in the `PRIVATE-TOKEN` header
    pub private_token: String,
    /// Assignee for every merge request
    pub assignee_id: i64,
    /// Numeric project id
    pub project_id: i64,
    /// Reviewers, in the order given
    pub reviewer_ids: Vec<i64>,
    /// Branches to open merge requests against, in the order given
    pub target_branches: Vec<String>,
    /// Description template; the ticket id is appended to it
    pub link_template: String,
    /// Prepended to every title
    pub user_prefix: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gitlab_url", &self.gitlab_url)
            .field("private_token", &"<redacted>")
            .field("assignee_id", &self.assignee_id)
            .field("project_id", &self.project_id)
            .field("reviewer_ids", &self.reviewer_ids)
            .field("target_branches", &self.target_branches)
            .field("link_template", &self.link_template)
            .field("user_prefix", &self.user_prefix)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset string variables read as empty. Numeric variables must parse
    /// as integers; list variables are split on `,` without trimming, so an
    /// empty `GL_REVIEWER_IDS` is rejected and an empty
    /// `GL_TARGET_BRANCHES` yields a single empty branch name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();

        let assignee_id = parse_id(GL_ASSIGNEE_ID, &get(GL_ASSIGNEE_ID))?;
        let project_id = parse_id(GL_PROJECT_ID, &get(GL_PROJECT_ID))?;
        let reviewer_ids = split_list(&get(GL_REVIEWER_IDS))
            .into_iter()
            .map(|id| parse_id(GL_REVIEWER_IDS, &id))
            .collect::<Result<Vec<_>>>()?;
        let target_branches = split_list(&get(GL_TARGET_BRANCHES));

        let config = Self {
            gitlab_url: get(GL_URL),
            private_token: get(GL_PRIVATE_TOKEN),
            assignee_id,
            project_id,
            reviewer_ids,
            target_branches,
            link_template: get(METEOR_LINK),
            user_prefix: get(USER_PREFIX),
        };

        debug!(?config, "loaded configuration");
        Ok(config)
    }
}

fn parse_id(var: &'static str, value: &str) -> Result<i64> {
    value.parse().map_err(|e| Error::Config {
        var,
        message: format!("{value:?} is not an integer ({e})"),
    })
}

fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(String::from).collect()
}

/// Seed the process environment from a dotenv file.
///
/// With an explicit `path` the file must exist. Without one, `./.env` is
/// loaded when present and skipped otherwise. Returns the file that was
/// loaded, if any.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_ENV_FILE), false),
    };

    match dotenvy::from_path(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(Some(path))
        }
        Err(e) if e.not_found() && !required => {
            debug!(path = %path.display(), "no env file, using process environment");
            Ok(None)
        }
        Err(e) => Err(Error::EnvFile(format!("{}: {e}", path.display()))),
    }
}
