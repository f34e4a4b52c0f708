use anyhow::{Result, bail};
use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::store::Store;
use crate::version::registries::DistIndexRegistry;
use crate::version::resolver::VersionResolver;

#[derive(Args)]
pub struct CurrentArgs {
    /// Version to make current, e.g. "8", "v8.1.2", "rc/v8.0.0-rc.2" or "latest".
    /// Omit to print the current version.
    pub version: Option<String>,
}

pub async fn execute(args: &CurrentArgs, config: &Config) -> Result<()> {
    let store = Store::new(config);
    store.initialize()?;

    let Some(spec) = args.version.as_deref() else {
        match store.current()? {
            Some(current) => info!(
                "The current version is set to \"{}\" and located at \"{}\".",
                current.human,
                current.path().map(|p| p.display().to_string()).unwrap_or_default()
            ),
            None => info!(
                "There's no version currently set. Use \"install\" or \"current\" to set one."
            ),
        }
        return Ok(());
    };

    let registry = DistIndexRegistry::new(&config.download_root);
    let id = VersionResolver::new().resolve(spec, Some(&registry)).await?;

    if store.find_installed(&id)?.is_none() {
        bail!(
            "Version \"{}\" is not installed yet. Use \"install\" to install it.",
            id.human
        );
    }

    store.make_current(&id)?;
    info!("Now using \"{}\".", id.human);
    Ok(())
}
