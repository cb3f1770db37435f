use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Beacon,
    id: 138,
    identifier: "beacon",
    name: BEACON,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .with_light(15)
}
