//! mrsend - create GitLab merge requests for a task across target branches
//!
//! The library is split the same way a run flows:
//! 1. [`config`] - read the environment into a typed [`config::Config`]
//! 2. [`dispatch::create_dispatch_plan`] - compute titles and descriptions (pure)
//! 3. [`dispatch::execute_dispatch`] - send one merge request per target branch (effectful)

pub mod config;
pub mod dispatch;
pub mod error;
pub mod platform;
pub mod types;
