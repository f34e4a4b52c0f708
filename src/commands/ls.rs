use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::store::Store;
use crate::version::identifier::VersionId;
use crate::version::semver::sort_semver_desc;

#[derive(Args)]
pub struct LsArgs {
    /// Order versions semantically (v10 before v9) instead of by name
    #[arg(long)]
    pub semver: bool,
}

pub fn execute(args: &LsArgs, config: &Config) -> Result<()> {
    let store = Store::new(config);
    store.initialize()?;

    let current = store.current()?;
    let mut installed = store.list_installed()?;
    if args.semver {
        sort_semver_desc(&mut installed);
    }

    print!("{}", render(current.as_ref(), &installed));
    Ok(())
}

fn render(current: Option<&VersionId>, installed: &[VersionId]) -> String {
    let current = current.map_or("Not set", |current| current.human.as_str());
    let installed: Vec<&str> = installed.iter().map(|id| id.human.as_str()).collect();

    format!("Current: {}\nInstalled: {}\n", current, installed.join(", "))
}
