use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: RedstoneLampOn,
    id: 124,
    identifier: "lit_redstone_lamp",
    name: REDSTONE_LAMP_ON,
    block_properties: Properties::new()
        .with_strength(0.3, 1.5)
        .with_light(15)
}
