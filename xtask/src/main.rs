use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
enum XtaskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to run trunk. Install it with 'cargo install trunk'.")]
    TrunkNotFound,
    #[error("{0} exited with a failure status")]
    CommandFailed(&'static str),
    #[error("Failed to locate the workspace root")]
    NoWorkspaceRoot,
}

type Result<T> = std::result::Result<T, XtaskError>;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for the capcraft workspace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web app locally with trunk (port 3000)
    Serve,
    /// Produce a release build of the web app
    Dist,
    /// Run the native test suite (client crate)
    Test,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => trunk(&["serve"]),
        Commands::Dist => trunk(&["build", "--release"]),
        Commands::Test => test(),
    }
}

/// Run trunk from the web app directory so it picks up Trunk.toml.
fn trunk(args: &[&str]) -> Result<()> {
    let app_dir = workspace_root()?.join("apps").join("capcraft-web");

    let status = Command::new("trunk")
        .args(args)
        .current_dir(&app_dir)
        .status()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                XtaskError::TrunkNotFound
            } else {
                XtaskError::Io(e)
            }
        })?;

    if !status.success() {
        return Err(XtaskError::CommandFailed("trunk"));
    }
    Ok(())
}

fn test() -> Result<()> {
    let status = Command::new("cargo")
        .args(["test", "-p", "capcraft-client"])
        .current_dir(workspace_root()?)
        .status()?;

    if !status.success() {
        return Err(XtaskError::CommandFailed("cargo test"));
    }
    Ok(())
}

fn workspace_root() -> Result<PathBuf> {
    // xtask lives directly under the workspace root.
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .ok_or(XtaskError::NoWorkspaceRoot)
}
