use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: BrickBlock,
    id: 45,
    identifier: "brick_block",
    name: BRICK_BLOCK,
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
