use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: HeavyWeightedPressurePlate,
    id: 148,
    identifier: "heavy_weighted_pressure_plate",
    name: IRON_PLATE,
    level: POWER,
    levels: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    block_properties: Properties::new()
        .with_strength(0.5, 2.5)
        .no_collision()
        .requires_correct_tool_for_drops()
}
