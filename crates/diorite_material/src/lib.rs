//! Legacy block materials: every pre-flattening block id with the sub-types
//! its 4-bit data value can encode.

pub mod block;
pub mod capability;
pub mod catalog;
pub mod color;
pub mod direction;
pub mod error;
pub mod wood;

pub use block::minecraft::MaterialPlugin;
pub use block::{Block, BlockId, BlockMaterial, BlockState, BlockVariant, LegacyBlockState};
pub use error::MaterialError;
pub use valence_ident::{Ident, ident};
