use sqlx::FromRow;
use thiserror::Error as ThisError;

/// Storage errors
#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("Slot {key} holds malformed data: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not encode data for slot {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, FromRow)]
pub struct SlotValue {
    pub value: String,
}
