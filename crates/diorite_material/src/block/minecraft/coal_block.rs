use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: CoalBlock,
    id: 173,
    identifier: "coal_block",
    name: COAL_BLOCK,
    block_properties: Properties::new()
        .with_strength(5.0, 30.0)
        .requires_correct_tool_for_drops()
        .flammable()
}
