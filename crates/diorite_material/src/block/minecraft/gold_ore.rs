use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: GoldOre,
    id: 14,
    identifier: "gold_ore",
    name: GOLD_ORE,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
}
