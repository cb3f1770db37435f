use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: NetherBrickStairs,
    id: 114,
    identifier: "nether_brick_stairs",
    name: NETHER_BRICK_STAIRS,
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
