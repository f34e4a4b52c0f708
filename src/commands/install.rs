use anyhow::{Context, Result};
use clap::Args;

use crate::config::Config;
use crate::install::Installer;
use crate::store::Store;
use crate::version::registries::DistIndexRegistry;
use crate::version::resolver::VersionResolver;

#[derive(Args)]
pub struct InstallArgs {
    /// Version to install, e.g. "8", "v8.1.2", "nightly/latest" or "rc/v8.0.0-rc.2".
    pub version: String,
}

/// Installs the requested version (or re-selects it when already installed)
/// and makes it current.
pub async fn execute(args: &InstallArgs, config: &Config) -> Result<()> {
    let store = Store::new(config);
    store.initialize()?;

    let registry = DistIndexRegistry::new(&config.download_root);
    let id = VersionResolver::new()
        .resolve(&args.version, Some(&registry))
        .await?;

    Installer::new(config, &store)
        .install(&id)
        .await
        .with_context(|| format!("An error occurred while installing \"{}\"", id.human))?;

    Ok(())
}
