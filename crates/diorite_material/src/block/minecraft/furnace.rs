use crate::block::behaviour::Properties;

crate::wall_block! {
    variant: Furnace,
    id: 61,
    identifier: "furnace",
    name: FURNACE,
    block_properties: Properties::new()
        .with_strength(3.5, 17.5)
        .requires_correct_tool_for_drops()
}
