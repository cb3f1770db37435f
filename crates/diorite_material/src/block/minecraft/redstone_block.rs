use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: RedstoneBlock,
    id: 152,
    identifier: "redstone_block",
    name: REDSTONE_BLOCK,
    block_properties: Properties::new()
        .with_strength(5.0, 30.0)
        .requires_correct_tool_for_drops()
}
