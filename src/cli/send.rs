//! Send command - create one merge request per target branch

use crate::cli::CliProgress;
use crate::cli::style::{CHECK, Stylize};
use anstream::println;
use dialoguer::Confirm;
use mrsend::config::{Config, load_env_file};
use mrsend::dispatch::{DispatchPlan, create_dispatch_plan, execute_dispatch};
use mrsend::error::{Error, Result};
use mrsend::platform::GitLabService;
use std::path::Path;
use tracing::debug;

/// Options for the send command
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Print the plan without sending anything
    pub dry_run: bool,
    /// Preview plan and prompt for confirmation before sending
    pub confirm: bool,
}

/// Run the send command
///
/// Only configuration problems (and an unreadable prompt) are returned as
/// errors; per-branch failures are printed and do not fail the run.
pub async fn run_send(
    task_name: &str,
    source_branch: &str,
    env_file: Option<&Path>,
    options: SendOptions,
) -> Result<()> {
    if let Some(path) = load_env_file(env_file)? {
        debug!(path = %path.display(), "env file applied");
    }
    let config = Config::from_env()?;

    let plan = create_dispatch_plan(&config, task_name, source_branch);

    if options.dry_run {
        print_plan(&plan);
        println!("{}", "Dry run complete".muted());
        return Ok(());
    }

    if options.confirm {
        print_plan(&plan);
        if !Confirm::new()
            .with_prompt("Create these merge requests?")
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))?
        {
            println!("{}", "Aborted".muted());
            return Ok(());
        }
        println!();
    }

    let service = GitLabService::new(&config)?;
    let report = execute_dispatch(&plan, &service, &CliProgress).await;

    debug!(
        created = report.created().len(),
        failed = report.failed().len(),
        "dispatch finished"
    );
    if report.is_success() && !report.outcomes.is_empty() {
        println!(
            "{}",
            format!("{CHECK} {} merge request(s) created", report.outcomes.len()).muted()
        );
    }

    Ok(())
}

fn print_plan(plan: &DispatchPlan) {
    println!(
        "{} {}",
        "Merge requests to create:".emphasis(),
        plan.len().accent()
    );
    println!();
    println!("{plan}");
    println!();
}
