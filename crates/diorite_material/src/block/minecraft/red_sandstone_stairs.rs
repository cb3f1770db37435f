use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: RedSandstoneStairs,
    id: 180,
    identifier: "red_sandstone_stairs",
    name: RED_SANDSTONE_STAIRS,
    block_properties: Properties::new()
        .with_strength(0.8, 4.0)
        .requires_correct_tool_for_drops()
}
