use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::block::family::tree::SAPLING_GROWN;
use crate::wood::WoodType;

crate::generate_block_states! {
    variant: Sapling,
    id: 6,
    identifier: "sapling",
    name: SAPLING,
    states: {
        SAPLING_OAK = "OAK" => 0x0,
        SAPLING_SPRUCE = "SPRUCE" => 0x1,
        SAPLING_BIRCH = "BIRCH" => 0x2,
        SAPLING_JUNGLE = "JUNGLE" => 0x3,
        SAPLING_ACACIA = "ACACIA" => 0x4,
        SAPLING_DARK_OAK = "DARK_OAK" => 0x5,
        SAPLING_OAK_GROWN = "OAK_GROWN" => 0x8,
        SAPLING_SPRUCE_GROWN = "SPRUCE_GROWN" => 0x9,
        SAPLING_BIRCH_GROWN = "BIRCH_GROWN" => 0xA,
        SAPLING_JUNGLE_GROWN = "JUNGLE_GROWN" => 0xB,
        SAPLING_ACACIA_GROWN = "ACACIA_GROWN" => 0xC,
        SAPLING_DARK_OAK_GROWN = "DARK_OAK_GROWN" => 0xD,
    },
    default: SAPLING_OAK,
    block_properties: Properties::new().instant_break().no_collision().flammable()
}

crate::impl_wood_kinds!(Sapling, mask: 0x7, offset: 0);

impl Sapling {
    pub fn get_sapling(wood: WoodType, grown: bool) -> Self {
        Self::resolve(wood.data() | if grown { SAPLING_GROWN } else { 0 })
    }

    /// Grows into a tree on its next growth tick.
    #[inline]
    pub fn is_grown(self) -> bool {
        self.0 & SAPLING_GROWN != 0
    }

    pub fn with_grown(self, grown: bool) -> Self {
        Self::resolve(if grown {
            self.0 | SAPLING_GROWN
        } else {
            self.0 & !SAPLING_GROWN
        })
    }
}
