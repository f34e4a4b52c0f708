//! nodeshelf: a Node.js version manager
//!
//! - [`version`]: Resolves version specs (`8`, `rc/v8.0.0-rc.2`, `nightly/latest`)
//!   into canonical identifiers
//! - [`store`]: The on-disk store of installed versions and the `current` link
//! - [`install`]: Download, verification and installation pipeline
//! - [`commands`]: CLI subcommands
//! - [`config`]: Environment-derived configuration
//! - [`logging`]: tracing subscriber setup

pub mod commands;
pub mod config;
pub mod install;
pub mod logging;
pub mod store;
pub mod version;
