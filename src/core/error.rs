use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodequestError {
    #[error("Unknown character class: {0}")]
    UnknownClass(String),

    #[error("Unknown achievement: {0}")]
    UnknownAchievement(String),

    #[error("Unknown quest: {0}")]
    UnknownQuest(String),

    #[error("Unknown skill node: {0}")]
    UnknownNode(String),

    #[error("Invalid content pack: {0}")]
    InvalidContent(String),

    #[error("Unsupported save version: {0}")]
    UnsupportedSaveVersion(u32),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodequestError>;
