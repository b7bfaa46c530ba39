use thiserror::Error;
use uikit_schema::{BlockElementType, BlockType};

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid document JSON")]
    Json(#[from] serde_json::Error),

    #[error("{block_type} block at depth {depth} has no block id")]
    MissingBlockId { block_type: BlockType, depth: usize },

    #[error("document nests blocks {depth} levels deep, the limit is {max}")]
    TooDeep { depth: usize, max: usize },

    #[error("block '{block_id}' has no app id")]
    MissingAppId { block_id: String },

    #[error("{element_type} element in block '{block_id}' has no action id")]
    MissingActionId {
        element_type: BlockElementType,
        block_id: String,
    },
}
