use crate::block::behaviour::Properties;

crate::liquid_block! {
    variant: StillWater,
    id: 9,
    identifier: "water",
    name: STILL_WATER,
    block_properties: Properties::new()
        .with_strength(100.0, 500.0)
        .no_collision()
        .replaceable()
}
