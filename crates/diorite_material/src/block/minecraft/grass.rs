use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Grass,
    id: 2,
    identifier: "grass",
    name: GRASS,
    block_properties: Properties::new().with_strength(0.6, 3.0)
}
