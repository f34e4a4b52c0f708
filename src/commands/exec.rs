//! Exec command
//!
//! Runs a command with an installed version's `bin/` directory first on
//! `PATH`, replacing the current version's entry if present.
//!
//! ```bash
//! nodeshelf exec 8 node --version
//! nodeshelf exec rc/v8.0.0-rc.2 npm test
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::debug;

use crate::config::Config;
use crate::store::Store;
use crate::version::resolver::VersionResolver;

#[derive(Args)]
pub struct ExecArgs {
    /// Version to run the command with. Resolved offline, so "latest" is not accepted.
    pub version: String,

    /// Command and arguments to execute.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Runs the command and returns its exit status as the process exit code.
pub async fn execute(args: &ExecArgs, config: &Config) -> Result<ExitCode> {
    let store = Store::new(config);
    store.initialize()?;

    let id = VersionResolver::new().resolve(&args.version, None).await?;

    let Some(version_path) = store.resolve_path(&id)? else {
        bail!(
            "Version \"{}\" is not installed yet. Use \"install\" to install it.",
            id.human
        );
    };

    let Some((program, program_args)) = args.command.split_first() else {
        return Ok(ExitCode::SUCCESS);
    };

    // Both the link itself and its resolved target may appear on PATH
    let mut current_bins = vec![config.current_link.join("bin")];
    if let Some(current) = store.current()?.and_then(|current| current.path) {
        current_bins.push(current.join("bin"));
    }
    let path = build_path(
        &current_bins,
        &version_path.join("bin"),
        std::env::var_os("PATH").as_deref(),
    )?;
    debug!("Running {} with PATH={}", program, path.to_string_lossy());

    let status = tokio::process::Command::new(program)
        .args(program_args)
        .env("PATH", path)
        .status()
        .await
        .with_context(|| format!("Failed to execute \"{}\"", program))?;

    Ok(status
        .code()
        .map(|code| ExitCode::from(code as u8))
        .unwrap_or(ExitCode::FAILURE))
}

/// Returns `path` with `current_bins` removed and `version_bin` prepended
fn build_path(
    current_bins: &[PathBuf],
    version_bin: &Path,
    path: Option<&OsStr>,
) -> Result<OsString> {
    let existing: Vec<PathBuf> = path
        .map(|path| std::env::split_paths(path).collect())
        .unwrap_or_default();

    let entries = std::iter::once(version_bin.to_path_buf()).chain(
        existing
            .into_iter()
            .filter(|entry| !current_bins.contains(entry)),
    );

    std::env::join_paths(entries).context("Failed to build PATH")
}
