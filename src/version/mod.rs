//! Version resolution layer
//!
//! This module turns user-supplied version specs into canonical identifiers,
//! consulting the remote channel index only for the `latest` keyword.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  "rc/8.0"   │────▶│  Resolver   │────▶│  VersionId  │
//! │   (spec)    │     │ (normalize) │     │ (full key)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼ only for "latest"
//!                     ┌─────────────┐
//!                     │ RemoteIndex │
//!                     │(index.json) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`identifier`]: The `VersionId` value type and full-key parsing
//! - [`resolver`]: Spec normalization (`8` -> `v8.0.0`) and `latest` lookup
//! - [`registry`]: Remote index trait
//! - [`registries`]: HTTP implementation against the distribution server
//! - [`semver`]: Opt-in semantic ordering of identifiers
//! - [`error`]: Error types for resolution and index lookups

pub mod error;
pub mod identifier;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod semver;
