//! Lookups across every block, independent of the typed variants.
//!
//! Material queries accept a block (numeric id, enum name or identifier)
//! optionally followed by `:` and a sub-type (data value or name):
//! `64:7`, `OAK_DOOR:BOTTOM_OPEN_NORTH`, `minecraft:wooden_door`,
//! `wool:black`.

use crate::block::behaviour::Properties;
use crate::block::minecraft::{block_by_id, block_registry};
use crate::block::{Block, BlockId, BlockMaterial, LegacyBlockState};
use crate::error::MaterialError;
use diorite_registry::Registry;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

static REGISTRY: LazyLock<Registry<&'static Block>> = LazyLock::new(block_registry);

#[inline]
pub fn registry() -> &'static Registry<&'static Block> {
    &REGISTRY
}

#[inline]
pub fn block(id: BlockId) -> Option<&'static Block> {
    block_by_id(id)
}

/// Finds a block by enum name (`OAK_DOOR`) or identifier (`wooden_door`,
/// `minecraft:wooden_door`), ignoring case.
pub fn block_by_name(name: &str) -> Option<&'static Block> {
    REGISTRY
        .get_by_name(name)
        .or_else(|| REGISTRY.get_by_identifier_str(name))
        .copied()
}

pub fn material(id: BlockId, data: u8) -> Option<BlockMaterial> {
    block(id)?.material(data)
}

pub fn material_by_name(block: &str, state: &str) -> Option<BlockMaterial> {
    let block = block_by_name(block)?;
    let state = block.state_by_name(state)?;
    Some(BlockMaterial { block, state })
}

fn parse_block(query: &str) -> Result<&'static Block, MaterialError> {
    if let Ok(id) = query.parse::<u16>() {
        return block(BlockId(id)).ok_or(MaterialError::UnknownBlock(BlockId(id)));
    }
    block_by_name(query).ok_or_else(|| MaterialError::UnknownName(query.to_owned()))
}

fn parse_state(block: &'static Block, query: &str) -> Result<BlockMaterial, MaterialError> {
    if let Ok(data) = query.parse::<u8>() {
        if data > 0xF {
            return Err(MaterialError::InvalidQuery {
                query: query.to_owned(),
                reason: "data values are four bits wide",
            });
        }
        return block.material(data).ok_or(MaterialError::UnknownData {
            block: block.name,
            data,
        });
    }
    block
        .state_by_name(query)
        .map(|state| BlockMaterial { block, state })
        .ok_or_else(|| MaterialError::UnknownName(format!("{}:{}", block.name, query)))
}

/// Parses a material query. A query naming only the block gives its default
/// sub-type.
pub fn parse(query: &str) -> Result<BlockMaterial, MaterialError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(MaterialError::InvalidQuery {
            query: query.to_owned(),
            reason: "empty query",
        });
    }

    // `minecraft:stone` names a block on its own, so try the whole query
    // before splitting off a sub-type.
    if let Ok(block) = parse_block(query) {
        return Ok(block.default_material());
    }

    let result = match query.rsplit_once(':') {
        Some((block, state)) => parse_block(block).and_then(|block| parse_state(block, state)),
        None => parse_block(query).map(|block| block.default_material()),
    };
    if let Err(err) = &result {
        debug!(query, %err, "material query did not resolve");
    }
    result
}

#[derive(Debug, Clone, Serialize)]
pub struct StateRecord {
    pub data: u8,
    pub legacy_state: LegacyBlockState,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockRecord {
    pub id: BlockId,
    pub identifier: &'static str,
    pub name: &'static str,
    pub properties: &'static Properties,
    pub default_state: &'static str,
    pub states: Vec<StateRecord>,
}

impl From<&'static Block> for BlockRecord {
    fn from(block: &'static Block) -> Self {
        BlockRecord {
            id: block.id,
            identifier: block.identifier.as_str(),
            name: block.name,
            properties: block.properties,
            default_state: block.default_state.name,
            states: block
                .states
                .iter()
                .map(|state| StateRecord {
                    data: state.data(),
                    legacy_state: state.id,
                    name: state.name,
                })
                .collect(),
        }
    }
}

/// One record per block in id order.
pub fn dump() -> Vec<BlockRecord> {
    crate::block::minecraft::ALL_BLOCKS
        .iter()
        .map(|&block| BlockRecord::from(block))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use crate::block::minecraft::wool::WOOL_BLACK;

    #[test]
    fn block_names_and_identifiers() {
        assert_eq!(block_by_name("OAK_DOOR").map(|b| b.id), Some(BlockId(64)));
        assert_eq!(block_by_name("oak_door").map(|b| b.id), Some(BlockId(64)));
        assert_eq!(block_by_name("wooden_door").map(|b| b.id), Some(BlockId(64)));
        assert_eq!(
            block_by_name("minecraft:wooden_door").map(|b| b.id),
            Some(BlockId(64))
        );
        assert_eq!(block_by_name("STONE_BRICK").map(|b| b.id), Some(BlockId(98)));
        assert!(block_by_name("oak_planks").is_none());
        assert_eq!(registry().len(), 198);
    }

    #[test]
    fn materials() {
        assert_eq!(material(BlockId(35), 15), Some(WOOL_BLACK.material()));
        assert_eq!(material(BlockId(35), 16), None);
        assert_eq!(material(BlockId(1), 7), None);
        assert_eq!(
            material_by_name("wool", "Black").map(|m| m.data()),
            Some(15)
        );
        assert!(material_by_name("wool", "BLUEISH").is_none());
    }

    #[test]
    fn parse_queries() {
        let door = parse("64:7").unwrap();
        assert_eq!(door.to_string(), "OAK_DOOR:BOTTOM_OPEN_NORTH");
        assert_eq!(parse("OAK_DOOR:BOTTOM_OPEN_NORTH"), Ok(door));
        assert_eq!(parse(" oak_door:bottom_open_north "), Ok(door));
        assert_eq!(parse("minecraft:wooden_door:7"), Ok(door));
        assert_eq!(
            parse("minecraft:wooden_door").map(|m| m.type_name()),
            Ok("BOTTOM_EAST")
        );
        assert_eq!(parse("wool:black"), Ok(WOOL_BLACK.material()));
        assert_eq!(parse("35").map(|m| m.type_name()), Ok("WHITE"));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse(""), Err(MaterialError::InvalidQuery { .. })));
        assert_eq!(parse("400:1"), Err(MaterialError::UnknownBlock(BlockId(400))));
        assert_eq!(
            parse("1:9"),
            Err(MaterialError::UnknownData {
                block: "STONE",
                data: 9
            })
        );
        assert!(matches!(
            parse("1:200"),
            Err(MaterialError::InvalidQuery { .. })
        ));
        assert_eq!(
            parse("wool:plaid"),
            Err(MaterialError::UnknownName("WOOL:plaid".to_owned()))
        );
        assert!(matches!(parse("nothing"), Err(MaterialError::UnknownName(_))));
    }

    #[test]
    fn dump_serializes_every_block() {
        let records = dump();
        assert_eq!(records.len(), 198);
        let door = &records[64];
        assert_eq!(door.identifier, "minecraft:wooden_door");
        assert_eq!(door.states.len(), 12);
        assert_eq!(door.states[7].legacy_state, LegacyBlockState(64 << 4 | 7));

        let json = serde_json::to_value(&records[35]).unwrap();
        assert_eq!(json["name"], "WOOL");
        assert_eq!(json["states"][15]["name"], "BLACK");
        assert_eq!(json["states"][15]["legacy_state"], 35 << 4 | 15);
    }
}
