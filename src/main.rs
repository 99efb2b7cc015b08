use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use git_version_bump::exec::ProcessRunner;
use git_version_bump::outputs::ActionOutputs;
use git_version_bump::workflow::{self, BumpOutcome};
use git_version_bump::{config, event, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-version-bump",
    about = "Bump the project version from commit messages, then commit, tag, and push"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-version-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration (file + environment overrides)
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Collect commit messages from the push event payload
    let event_path = std::env::var_os("GITHUB_EVENT_PATH").map(PathBuf::from);
    let messages = match event::collect_commit_messages(event_path.as_deref()) {
        Ok(messages) => messages,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_commit_analysis(&messages);

    let runner = ProcessRunner;
    let mut outputs = ActionOutputs::from_env();

    match workflow::run_bump_workflow(&config, &messages, &runner, &mut outputs, args.dry_run) {
        Ok(BumpOutcome::AlreadyBumped) => {
            ui::display_success("Version already bumped!");
            Ok(())
        }
        Ok(BumpOutcome::Bumped { tag, .. }) => {
            ui::display_success(&format!("Version bumped! Created tag {}", tag));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            ui::display_error("Failed to bump version");
            std::process::exit(1);
        }
    }
}
