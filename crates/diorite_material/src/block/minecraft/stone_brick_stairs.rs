use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: StoneBrickStairs,
    id: 109,
    identifier: "stone_brick_stairs",
    name: SMOOTH_STAIRS,
    block_properties: Properties::new()
        .with_strength(1.5, 30.0)
        .requires_correct_tool_for_drops()
}
