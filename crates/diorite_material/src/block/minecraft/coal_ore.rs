use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: CoalOre,
    id: 16,
    identifier: "coal_ore",
    name: COAL_ORE,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
}
