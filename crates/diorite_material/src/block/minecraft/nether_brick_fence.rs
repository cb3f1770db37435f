use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: NetherBrickFence,
    id: 113,
    identifier: "nether_brick_fence",
    name: NETHER_FENCE,
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
