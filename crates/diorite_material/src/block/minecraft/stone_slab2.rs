use crate::block::behaviour::Properties;

crate::slab_block! {
    variant: StoneSlab2,
    id: 182,
    identifier: "stone_slab2",
    name: STONE_SLAB_2,
    kinds: {
        RED_SANDSTONE => 0,
    },
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
