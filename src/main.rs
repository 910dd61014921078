//! mrsend CLI entry point

mod cli;

use clap::Parser;
use cli::send::{SendOptions, run_send};
use cli::style::Stylize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Create GitLab merge requests for a task across target branches
#[derive(Parser, Debug)]
#[command(name = "mrsend", version, about, long_about = None)]
struct Cli {
    /// Task name, e.g. "ВВ-11111 fix login"; the ticket id goes into the description
    task_name: String,

    /// Source branch, e.g. feature/48904
    source_branch: String,

    /// Dotenv file to load (default: ./.env when present)
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Print the merge requests that would be created and exit
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Preview the merge requests and ask before creating them
    #[arg(short, long)]
    confirm: bool,

    /// Debug-level diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = SendOptions {
        dry_run: cli.dry_run,
        confirm: cli.confirm,
    };

    match run_send(
        &cli.task_name,
        &cli.source_branch,
        cli.env_file.as_deref(),
        options,
    )
    .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            anstream::eprintln!("{} {e}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
