use crate::block::behaviour::Properties;

crate::liquid_block! {
    variant: StillLava,
    id: 11,
    identifier: "lava",
    name: STILL_LAVA,
    block_properties: Properties::new()
        .with_strength(100.0, 500.0)
        .no_collision()
        .replaceable()
        .with_light(15)
}
