use crate::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrowdfundError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("Data file {} is corrupt: {source}", path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl CrowdfundError {
    /// Whether the caller may correct its input and try again.
    ///
    /// Storage and I/O failures are not recoverable; the presentation layer
    /// should stop instead of re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CrowdfundError::Validation(_)
                | CrowdfundError::NotFound(_)
                | CrowdfundError::Duplicate(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CrowdfundError>;
