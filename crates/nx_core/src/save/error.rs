use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
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

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid save slot: {slot}")]
    InvalidSlot { slot: u8 },
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::FileNotFound { .. } => true,
            SaveError::VersionMismatch { .. } => true, // older saves can be re-read after migration
            _ => false,
        }
    }
}
