use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: MossyCobblestone,
    id: 48,
    identifier: "mossy_cobblestone",
    name: MOSSY_COBBLESTONE,
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
