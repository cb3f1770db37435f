use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: DoubleStoneSlab,
    id: 43,
    identifier: "double_stone_slab",
    name: DOUBLE_STONE_SLAB,
    kinds: {
        STONE => 0,
        SANDSTONE => 1,
        WOODEN => 2,
        COBBLESTONE => 3,
        BRICK => 4,
        STONE_BRICK => 5,
        NETHER_BRICK => 6,
        QUARTZ => 7,
        SEAMLESS_STONE => 8,
        SEAMLESS_SANDSTONE => 9,
        SMOOTH_QUARTZ => 15,
    },
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
