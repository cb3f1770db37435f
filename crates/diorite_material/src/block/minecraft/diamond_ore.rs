use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: DiamondOre,
    id: 56,
    identifier: "diamond_ore",
    name: DIAMOND_ORE,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
}
