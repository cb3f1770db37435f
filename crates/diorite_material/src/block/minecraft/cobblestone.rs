use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Cobblestone,
    id: 4,
    identifier: "cobblestone",
    name: COBBLESTONE,
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
