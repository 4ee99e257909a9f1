use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted data")]
    Corrupted,

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Unsupported record version: found {found}, supported up to {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl StoreError {
    /// Whether retrying or falling back to another file can help. Integrity
    /// failures and future-version records are terminal.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Io(_) => true,
            StoreError::FileNotFound { .. } => true,
            StoreError::Corrupted => false,
            StoreError::ChecksumMismatch => false,
            StoreError::UnsupportedVersion { .. } => false,
            _ => false,
        }
    }
}
