use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: LapisBlock,
    id: 22,
    identifier: "lapis_block",
    name: LAPIS_BLOCK,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
}
