use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid version spec: {0}")]
    InvalidSpec(String),

    #[error("Unable to find a latest version for channel \"{channel}\": {reason}")]
    RemoteResolutionFailed { channel: String, reason: String },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Channel not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
