//! Installation layer
//!
//! # Modules
//!
//! - [`platform`]: Archive naming and download URIs per platform
//! - [`download`]: HTTP transport for manifests and archives
//! - [`checksum`]: SHA-256 manifest lookup and verification
//! - [`installer`]: The download → verify → extract → make-current pipeline
//! - [`error`]: Error type for install operations

pub mod checksum;
pub mod download;
pub mod error;
pub mod installer;
pub mod platform;

pub use installer::{InstallOutcome, Installer};
