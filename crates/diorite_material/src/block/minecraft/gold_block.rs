use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: GoldBlock,
    id: 41,
    identifier: "gold_block",
    name: GOLD_BLOCK,
    block_properties: Properties::new()
        .with_strength(3.0, 30.0)
        .requires_correct_tool_for_drops()
}
