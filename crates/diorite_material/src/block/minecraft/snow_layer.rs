use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: SnowLayer,
    id: 78,
    identifier: "snow_layer",
    name: SNOW_LAYER,
    level: HEIGHT,
    levels: [0, 1, 2, 3, 4, 5, 6, 7],
    block_properties: Properties::new()
        .with_strength(0.1, 0.5)
        .replaceable()
}
