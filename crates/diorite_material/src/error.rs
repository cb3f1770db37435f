use crate::block::BlockId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaterialError {
    /// The attribute exists on the block but not on this part of it, for
    /// example the facing of a door's top half.
    #[error("{block}:{state} has no `{attribute}` attribute")]
    UndefinedAttribute {
        block: &'static str,
        state: &'static str,
        attribute: &'static str,
    },
    #[error("unknown block id {0}")]
    UnknownBlock(BlockId),
    #[error("block {block} has no state with data value {data}")]
    UnknownData { block: &'static str, data: u8 },
    #[error("unknown material name `{0}`")]
    UnknownName(String),
    #[error("invalid material query `{query}`: {reason}")]
    InvalidQuery { query: String, reason: &'static str },
}
