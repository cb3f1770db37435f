use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::wood::WoodType;

crate::kinds_block! {
    variant: DoubleWoodenSlab,
    id: 125,
    identifier: "double_wooden_slab",
    name: DOUBLE_WOODEN_SLAB,
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

crate::impl_wood_kinds!(DoubleWoodenSlab, mask: 0x7, offset: 0);

impl DoubleWoodenSlab {
    pub fn get_double_wooden_slab(wood: WoodType) -> Self {
        Self::resolve(wood.data())
    }
}
