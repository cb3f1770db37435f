use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: NetherBrick,
    id: 112,
    identifier: "nether_brick",
    name: NETHER_BRICK,
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
