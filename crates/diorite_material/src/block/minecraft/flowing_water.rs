use crate::block::behaviour::Properties;

crate::liquid_block! {
    variant: FlowingWater,
    id: 8,
    identifier: "flowing_water",
    name: FLOWING_WATER,
    block_properties: Properties::new()
        .with_strength(100.0, 500.0)
        .no_collision()
        .replaceable()
}
