use crate::block::behaviour::Properties;
use crate::error::MaterialError;
use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use valence_ident::Ident;

pub mod behaviour;
pub mod family;
pub mod macros;
pub mod minecraft;

/// Legacy numeric block id.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    Debug,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
pub struct BlockId(pub u16);

/// Block id and data value packed the way the legacy chunk and packet
/// formats store them: `id << 4 | data`.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Debug, From, Into, Deref, Serialize,
)]
pub struct LegacyBlockState(pub u16);

impl LegacyBlockState {
    #[inline]
    pub const fn new(block: BlockId, data: u8) -> Self {
        LegacyBlockState(block.0 << 4 | (data & 0xF) as u16)
    }

    #[inline]
    pub const fn block_id(self) -> BlockId {
        BlockId(self.0 >> 4)
    }

    #[inline]
    pub const fn data(self) -> u8 {
        (self.0 & 0xF) as u8
    }
}

#[derive(Debug)]
pub struct Block {
    pub id: BlockId,
    pub identifier: Ident<&'static str>,
    /// Upper-case enum-style name, e.g. `OAK_DOOR`.
    pub name: &'static str,
    pub properties: &'static Properties,
    pub default_state: &'static BlockState,
    pub states: &'static [BlockState],
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Block {}

impl Hash for Block {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Block {
    #[inline]
    pub fn hardness(&self) -> f32 {
        self.properties.hardness
    }

    #[inline]
    pub fn blast_resistance(&self) -> f32 {
        self.properties.blast_resistance
    }

    pub fn state(&self, data: u8) -> Option<&'static BlockState> {
        self.states.iter().find(|state| state.data() == data)
    }

    /// Sub-type lookup ignoring ASCII case.
    pub fn state_by_name(&self, name: &str) -> Option<&'static BlockState> {
        self.states
            .iter()
            .find(|state| state.name.eq_ignore_ascii_case(name))
    }

    #[inline]
    pub fn used_data_values(&self) -> usize {
        self.states.len()
    }

    pub fn material(&'static self, data: u8) -> Option<BlockMaterial> {
        self.state(data)
            .map(|state| BlockMaterial { block: self, state })
    }

    pub fn default_material(&'static self) -> BlockMaterial {
        BlockMaterial {
            block: self,
            state: self.default_state,
        }
    }
}

impl From<&'static Block> for LegacyBlockState {
    fn from(block: &'static Block) -> Self {
        block.default_state.id
    }
}

#[derive(Debug, Eq)]
pub struct BlockState {
    pub id: LegacyBlockState,
    /// Sub-type name, e.g. `BOTTOM_OPEN_NORTH`.
    pub name: &'static str,
}

impl BlockState {
    pub const fn new(block: u16, data: u8, name: &'static str) -> Self {
        BlockState {
            id: LegacyBlockState::new(BlockId(block), data),
            name,
        }
    }

    #[inline]
    pub const fn data(&self) -> u8 {
        self.id.data()
    }
}

impl PartialEq for BlockState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for BlockState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<&BlockState> for LegacyBlockState {
    fn from(state: &BlockState) -> Self {
        state.id
    }
}

/// Finds the state registered under `data`. Used in const context, where a
/// missing state stops compilation.
pub const fn find_state(states: &'static [BlockState], data: u8) -> &'static BlockState {
    let mut i = 0;
    while i < states.len() {
        if states[i].data() == data {
            return &states[i];
        }
        i += 1;
    }
    panic!("default state is not registered")
}

/// True when every state has its own data value below 16 and all states
/// share one block id.
pub const fn has_unique_data(states: &[BlockState]) -> bool {
    let mut seen = 0u16;
    let mut i = 0;
    while i < states.len() {
        if states[i].id.0 >> 4 != states[0].id.0 >> 4 {
            return false;
        }
        let bit = 1u16 << states[i].data();
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
        i += 1;
    }
    true
}

/// One typed value per registered sub-type of a block. Implementations are
/// generated by [`generate_block_states!`](crate::generate_block_states), which
/// also declares a named constant for each value.
pub trait BlockVariant: Copy + Eq + Debug + Send + Sync + 'static {
    const BLOCK: &'static Block;
    const DEFAULT: Self;
    /// Every registered value, in the order of `BLOCK.states`.
    const ALL: &'static [Self];

    fn data(self) -> u8;

    fn by_id(data: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.data() == data)
    }

    fn by_name(name: &str) -> Option<Self> {
        Self::BLOCK
            .state_by_name(name)
            .and_then(|state| Self::by_id(state.data()))
    }

    /// Like [`BlockVariant::by_id`], falling back to the default sub-type.
    fn resolve(data: u8) -> Self {
        Self::by_id(data).unwrap_or(Self::DEFAULT)
    }

    fn state(self) -> &'static BlockState {
        Self::BLOCK
            .state(self.data())
            .unwrap_or(Self::BLOCK.default_state)
    }

    #[inline]
    fn type_name(self) -> &'static str {
        self.state().name
    }

    #[inline]
    fn block() -> &'static Block {
        Self::BLOCK
    }

    fn material(self) -> BlockMaterial {
        BlockMaterial {
            block: Self::BLOCK,
            state: self.state(),
        }
    }

    #[inline]
    fn legacy_state(self) -> LegacyBlockState {
        LegacyBlockState::new(Self::BLOCK.id, self.data())
    }

    #[inline]
    fn used_data_values() -> usize {
        Self::ALL.len()
    }

    fn undefined<T>(self, attribute: &'static str) -> Result<T, MaterialError> {
        Err(MaterialError::UndefinedAttribute {
            block: Self::BLOCK.name,
            state: self.type_name(),
            attribute,
        })
    }
}

/// A registered (block, sub-type) pair without its static type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockMaterial {
    pub block: &'static Block,
    pub state: &'static BlockState,
}

impl BlockMaterial {
    #[inline]
    pub fn id(&self) -> BlockId {
        self.block.id
    }

    #[inline]
    pub fn data(&self) -> u8 {
        self.state.data()
    }

    #[inline]
    pub fn legacy_state(&self) -> LegacyBlockState {
        self.state.id
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.state.name
    }

    /// Recovers the typed sub-type when this material belongs to `V`'s block.
    pub fn downcast<V: BlockVariant>(&self) -> Option<V> {
        if self.block.id == V::BLOCK.id {
            V::by_id(self.data())
        } else {
            None
        }
    }
}

impl std::fmt::Display for BlockMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.block.name, self.state.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_state_packing() {
        let state = LegacyBlockState::new(BlockId(64), 7);
        assert_eq!(state.0, 64 << 4 | 7);
        assert_eq!(state.block_id(), BlockId(64));
        assert_eq!(state.data(), 7);
        assert_eq!(LegacyBlockState::new(BlockId(1), 0x1F).data(), 0xF);
    }

    #[test]
    fn unique_data_check() {
        const OK: &[BlockState] = &[BlockState::new(5, 0, "A"), BlockState::new(5, 15, "B")];
        const DUPLICATE: &[BlockState] = &[BlockState::new(5, 2, "A"), BlockState::new(5, 2, "B")];
        const MIXED: &[BlockState] = &[BlockState::new(5, 0, "A"), BlockState::new(6, 1, "B")];
        assert!(has_unique_data(OK));
        assert!(!has_unique_data(DUPLICATE));
        assert!(!has_unique_data(MIXED));
        assert_eq!(find_state(OK, 15).name, "B");
    }
}
