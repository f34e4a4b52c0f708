//! CLI subcommands
//!
//! - [`current`] - Print or set the current version
//! - [`install`] - Install a version and make it current
//! - [`exec`] - Run a command against an installed version
//! - [`ls`] - List installed versions
//! - [`ls_remote`] - List published versions of a channel
//! - [`which`] - Print the installed path of a version
//!
//! Every command initializes the store before touching it.

pub mod current;
pub mod exec;
pub mod install;
pub mod ls;
pub mod ls_remote;
pub mod which;
