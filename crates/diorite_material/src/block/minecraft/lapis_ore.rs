use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: LapisOre,
    id: 21,
    identifier: "lapis_ore",
    name: LAPIS_ORE,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
}
