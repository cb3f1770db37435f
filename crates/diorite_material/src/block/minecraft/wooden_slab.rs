use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::block::family::slab::UPPER;
use crate::wood::WoodType;

crate::slab_block! {
    variant: WoodenSlab,
    id: 126,
    identifier: "wooden_slab",
    name: WOODEN_SLAB,
    kinds: {
        OAK => 0,
        SPRUCE => 1,
        BIRCH => 2,
        JUNGLE => 3,
        ACACIA => 4,
        DARK_OAK => 5,
    },
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}

crate::impl_wood_kinds!(WoodenSlab, mask: 0x7, offset: 0);

impl WoodenSlab {
    pub fn get_wooden_slab(wood: WoodType, upper: bool) -> Self {
        Self::resolve(wood.data() | if upper { UPPER } else { 0 })
    }
}
