use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: SandstoneStairs,
    id: 128,
    identifier: "sandstone_stairs",
    name: SANDSTONE_STAIRS,
    block_properties: Properties::new()
        .with_strength(0.8, 4.0)
        .requires_correct_tool_for_drops()
}
