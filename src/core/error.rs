//! Crate error type.
//!
//! Navigation, filtering, deck arithmetic and window stacking never fail.
//! Errors only come from untrusted input (catalog data, config files,
//! snapshots), the backend boundary and the filter worker channel.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate pronounce in catalog: {0}")]
    DuplicatePronounce(String),

    #[error("Backend request failed: {0}")]
    Backend(String),

    #[error("Deck save rejected by backend")]
    SaveRejected,

    #[error("Filter worker disconnected")]
    WorkerDisconnected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format value: {0}")]
    InvalidFormat(u8),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl Error {
    /// Whether the error came from the backend boundary.
    ///
    /// The engine surfaces these to the caller unchanged and never retries.
    #[must_use]
    pub fn is_backend(&self) -> bool {
        matches!(self, Error::Backend(_) | Error::SaveRejected)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
