use crate::block::behaviour::Properties;

crate::slab_block! {
    variant: StoneSlab,
    id: 44,
    identifier: "stone_slab",
    name: STONE_SLAB,
    kinds: {
        STONE => 0,
        SANDSTONE => 1,
        WOODEN => 2,
        COBBLESTONE => 3,
        BRICK => 4,
        STONE_BRICK => 5,
        NETHER_BRICK => 6,
        QUARTZ => 7,
    },
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
