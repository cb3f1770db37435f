use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: IronOre,
    id: 15,
    identifier: "iron_ore",
    name: IRON_ORE,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
}
