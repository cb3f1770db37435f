use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: DiamondBlock,
    id: 57,
    identifier: "diamond_block",
    name: DIAMOND_BLOCK,
    block_properties: Properties::new()
        .with_strength(5.0, 30.0)
        .requires_correct_tool_for_drops()
}
