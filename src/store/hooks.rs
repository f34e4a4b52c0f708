//! Lifecycle hook scripts

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::version::identifier::VersionId;

/// The only lifecycle hook currently defined
pub const POST_INSTALL: &str = "post_install";

/// Script seeded into `hooks/post_install.sh` on first use
pub const POST_INSTALL_TEMPLATE: &str = r#"#!/bin/sh
#
# Runs after a version has been installed and set as current.
#
# Available variables:
#   NODESHELF_HOOK_VERSION  installed version, e.g. release/v8.0.0
#   NODESHELF_HOOK_PATH     directory the version was installed into
#
# Example: install global packages into every new version
#   "$NODESHELF_HOOK_PATH/bin/npm" install -g yarn
"#;

/// Returns the script file name for a hook, or `None` for unknown hooks
pub fn script_name(hook: &str) -> Option<&'static str> {
    match hook {
        POST_INSTALL => Some("post_install.sh"),
        _ => None,
    }
}

/// Runs a hook script through `sh` with inherited standard streams
pub fn run(script: &Path, version: &VersionId) -> io::Result<ExitStatus> {
    debug!("Running hook {}", script.display());

    let mut command = Command::new("sh");
    command
        .arg(script)
        .env("NODESHELF_HOOK_VERSION", &version.human);
    if let Some(path) = version.path() {
        command.env("NODESHELF_HOOK_PATH", path);
    }
    command.status()
}
