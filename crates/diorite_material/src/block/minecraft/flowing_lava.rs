use crate::block::behaviour::Properties;

crate::liquid_block! {
    variant: FlowingLava,
    id: 10,
    identifier: "flowing_lava",
    name: FLOWING_LAVA,
    block_properties: Properties::new()
        .with_strength(100.0, 500.0)
        .no_collision()
        .replaceable()
        .with_light(15)
}
