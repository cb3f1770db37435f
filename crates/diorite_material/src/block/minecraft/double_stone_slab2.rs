use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: DoubleStoneSlab2,
    id: 181,
    identifier: "double_stone_slab2",
    name: DOUBLE_STONE_SLAB_2,
    kinds: {
        RED_SANDSTONE => 0,
        SEAMLESS_RED_SANDSTONE => 8,
    },
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
