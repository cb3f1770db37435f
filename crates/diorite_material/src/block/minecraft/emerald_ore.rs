use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: EmeraldOre,
    id: 129,
    identifier: "emerald_ore",
    name: EMERALD_ORE,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
}
