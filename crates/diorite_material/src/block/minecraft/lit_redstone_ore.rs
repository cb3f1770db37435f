use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: GlowingRedstoneOre,
    id: 74,
    identifier: "lit_redstone_ore",
    name: GLOWING_REDSTONE_ORE,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
        .with_light(9)
}
