use crate::block::behaviour::Properties;

crate::powerable_block! {
    variant: StonePressurePlate,
    id: 70,
    identifier: "stone_pressure_plate",
    name: STONE_PLATE,
    flag: POWERED,
    block_properties: Properties::new()
        .with_strength(0.5, 2.5)
        .no_collision()
        .requires_correct_tool_for_drops()
}
