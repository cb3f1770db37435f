use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: QuartzOre,
    id: 153,
    identifier: "quartz_ore",
    name: QUARTZ_ORE,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .requires_correct_tool_for_drops()
}
