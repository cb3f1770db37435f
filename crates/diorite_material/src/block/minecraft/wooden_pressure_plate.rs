use crate::block::behaviour::Properties;

crate::powerable_block! {
    variant: WoodenPressurePlate,
    id: 72,
    identifier: "wooden_pressure_plate",
    name: WOOD_PLATE,
    flag: POWERED,
    block_properties: Properties::new()
        .with_strength(0.5, 2.5)
        .no_collision()
        .flammable()
}

crate::impl_wooden!(WoodenPressurePlate, Oak);
