use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: RedstoneOre,
    id: 73,
    identifier: "redstone_ore",
    name: REDSTONE_ORE,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
}
