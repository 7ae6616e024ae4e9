use thiserror::Error;

/// Engine-level error taxonomy.
///
/// Every variant is a local, recoverable condition surfaced to the caller
/// as a user-facing message. A failed operation never leaves partial
/// mutations behind: sign/sell/scout either complete or leave the ledger
/// untouched.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid attribute {attribute}: {value}. Must be between 0 and 100")]
    InvalidStats { attribute: &'static str, value: u8 },

    #[error("Squad is empty: cannot compute aggregate power")]
    EmptySquad,

    #[error("Insufficient funds: {required} credits required, {available} available")]
    InsufficientFunds { required: u32, available: i64 },

    #[error("Player not found: {player_id}")]
    NotFound { player_id: String },

    #[error("Invalid generated profile: {0}")]
    InvalidGeneratedProfile(String),

    #[error("Inconsistent match result: {0}")]
    InconsistentMatchResult(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            CoreError::DeserializationError(err.to_string())
        } else {
            CoreError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
