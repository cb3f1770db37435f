use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: EndStone,
    id: 121,
    identifier: "end_stone",
    name: ENDER_STONE,
    block_properties: Properties::new()
        .with_strength(3.0, 45.0)
        .requires_correct_tool_for_drops()
}
