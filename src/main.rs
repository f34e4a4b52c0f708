use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use nodeshelf::commands::{current, exec, install, ls, ls_remote, which};
use nodeshelf::config::Config;

#[derive(Parser)]
#[command(name = "nodeshelf")]
#[command(
    version,
    about = "Install and switch between Node.js versions",
    after_help = "\
VERSION SPECS:
    8, v8.1, 8.1.2          Release versions, padded to vX.Y.Z
    rc/v8.0.0-rc.2          Channel-qualified versions
    latest, nightly/latest  Newest published version of a channel

ENVIRONMENT VARIABLES:
    NODESHELF_STORAGE_ROOT      Storage directory (default: ~/.nodeshelf)
    NODESHELF_DOWNLOAD_ROOT     Download server (default: https://nodejs.org/download)
    NODESHELF_NO_COLOR          Disable colored output
    RUST_LOG                    Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print or set the current version
    #[command(visible_aliases = ["use", "c", "version"])]
    Current(current::CurrentArgs),

    /// Install a version and make it current
    #[command(visible_alias = "i")]
    Install(install::InstallArgs),

    /// Execute a command with the given version
    #[command(visible_alias = "e")]
    Exec(exec::ExecArgs),

    /// Print all installed versions
    Ls(ls::LsArgs),

    /// Print all published versions of a channel
    #[command(name = "ls-remote")]
    LsRemote(ls_remote::LsRemoteArgs),

    /// Print the path to a version, or to the current version when omitted
    #[command(visible_alias = "w")]
    Which(which::WhichArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();

    let _guard = match nodeshelf::logging::init(config.color) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            None
        }
    };

    match run(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            error!("An unexpected error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match cli.command {
            Command::Current(args) => current::execute(&args, config).await?,
            Command::Install(args) => install::execute(&args, config).await?,
            Command::Exec(args) => return exec::execute(&args, config).await,
            Command::Ls(args) => ls::execute(&args, config)?,
            Command::LsRemote(args) => ls_remote::execute(&args, config).await?,
            Command::Which(args) => which::execute(&args, config).await?,
        }
        Ok(ExitCode::SUCCESS)
    })
}
