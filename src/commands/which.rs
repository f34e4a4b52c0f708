use anyhow::{Result, bail};
use clap::Args;

use crate::config::Config;
use crate::store::Store;
use crate::version::registries::DistIndexRegistry;
use crate::version::resolver::VersionResolver;

#[derive(Args)]
pub struct WhichArgs {
    /// Version to locate. Omit to print the path of the current version.
    pub version: Option<String>,
}

pub async fn execute(args: &WhichArgs, config: &Config) -> Result<()> {
    let store = Store::new(config);
    store.initialize()?;

    let Some(spec) = args.version.as_deref() else {
        let Some(path) = store.current()?.and_then(|current| current.path) else {
            bail!("No version explicitly specified and no \"current\" version set");
        };
        println!("{}", path.display());
        return Ok(());
    };

    let registry = DistIndexRegistry::new(&config.download_root);
    let id = VersionResolver::new().resolve(spec, Some(&registry)).await?;

    match store.resolve_path(&id)? {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => bail!("Version \"{}\" is not installed.", id.human),
    }
}
