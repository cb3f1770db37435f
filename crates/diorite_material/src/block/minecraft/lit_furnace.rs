use crate::block::behaviour::Properties;

crate::wall_block! {
    variant: LitFurnace,
    id: 62,
    identifier: "lit_furnace",
    name: LIT_FURNACE,
    block_properties: Properties::new()
        .with_strength(3.5, 17.5)
        .requires_correct_tool_for_drops()
        .with_light(13)
}
