//! Ls-remote command
//!
//! Prints a channel's published versions grouped by major version:
//!
//! ```text
//! v8.x:
//!     v8.1.0  v8.0.0
//! v7.x:
//!     v7.10.0 v7.9.0  v7.8.0  v7.7.4
//!     v7.7.3
//! ```

use anyhow::{Context, Result};
use clap::Args;
use indexmap::IndexMap;

use crate::config::Config;
use crate::store::Store;
use crate::version::registries::DistIndexRegistry;
use crate::version::registry::RemoteIndex;

/// Number of versions printed per row
const VERSIONS_PER_ROW: usize = 4;

/// Group name for versions without a major prefix
const OTHER_GROUP: &str = "other";

#[derive(Args)]
pub struct LsRemoteArgs {
    /// Release channel, e.g. "release", "rc" or "nightly"
    pub channel: String,
}

pub async fn execute(args: &LsRemoteArgs, config: &Config) -> Result<()> {
    let store = Store::new(config);
    store.initialize()?;

    let registry = DistIndexRegistry::new(&config.download_root);
    let versions = registry
        .versions(&args.channel)
        .await
        .with_context(|| {
            format!(
                "An error occurred while fetching the versions of \"{}\"",
                args.channel
            )
        })?;

    print!("{}", render_groups(&versions, ".", ".x"));
    Ok(())
}

/// Groups versions by the text before the first `separator`, keeping the
/// order in which groups and versions first appear
fn group_by_prefix<'a>(
    versions: &'a [String],
    separator: &str,
) -> IndexMap<&'a str, Vec<&'a str>> {
    let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for version in versions {
        let prefix = version
            .split_once(separator)
            .map_or(OTHER_GROUP, |(prefix, _)| prefix);
        groups.entry(prefix).or_default().push(version);
    }
    groups
}

fn render_groups(versions: &[String], separator: &str, suffix: &str) -> String {
    let mut out = String::new();

    for (group, members) in group_by_prefix(versions, separator) {
        out.push_str(&format!("{}{}:\n", group, suffix));

        let width = members.iter().map(|v| v.len()).max().unwrap_or(0);
        for row in members.chunks(VERSIONS_PER_ROW) {
            for version in row {
                out.push_str(&format!("\t{:<width$}", version, width = width));
            }
            out.push('\n');
        }
    }

    out
}
