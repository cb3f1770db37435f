use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: EmeraldBlock,
    id: 133,
    identifier: "emerald_block",
    name: EMERALD_BLOCK,
    block_properties: Properties::new()
        .with_strength(5.0, 30.0)
        .requires_correct_tool_for_drops()
}
