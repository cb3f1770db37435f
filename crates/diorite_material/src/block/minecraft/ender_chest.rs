use crate::block::behaviour::Properties;

crate::wall_block! {
    variant: EnderChest,
    id: 130,
    identifier: "ender_chest",
    name: ENDER_CHEST,
    block_properties: Properties::new()
        .with_strength(22.5, 3000.0)
        .requires_correct_tool_for_drops()
        .with_light(7)
}
