use std::path::PathBuf;

/// Errors raised while loading or saving a trigger file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not contain JSON at all.
    #[error("{path} is not valid json: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is JSON but not shaped as `{ scope: { trigger: text } }`.
    #[error("{path} has an unexpected layout: {source}")]
    Shape {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize triggers: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    #[error("blocking write task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Errors surfaced by the plugins and their host.
#[derive(Debug, thiserror::Error)]
pub enum CogError {
    #[error("trigger '{0}' already exists")]
    AlreadyExists(String),

    #[error("'{0}' is the name of a bot command")]
    ReservedName(String),

    #[error("trigger '{0}' is not a single word")]
    MultiWord(String),

    #[error("trigger '{0}' does not exist")]
    NotFound(String),

    #[error("scope has no triggers to edit")]
    ScopeEmpty,

    #[error("scope has no triggers")]
    NoTriggers,

    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T, E = CogError> = std::result::Result<T, E>;
