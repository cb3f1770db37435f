use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: BrickStairs,
    id: 108,
    identifier: "brick_stairs",
    name: BRICK_STAIRS,
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
