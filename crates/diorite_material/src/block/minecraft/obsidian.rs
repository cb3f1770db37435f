use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Obsidian,
    id: 49,
    identifier: "obsidian",
    name: OBSIDIAN,
    block_properties: Properties::new()
        .with_strength(50.0, 6000.0)
        .requires_correct_tool_for_drops()
}
