use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: RedstoneLampOff,
    id: 123,
    identifier: "redstone_lamp",
    name: REDSTONE_LAMP_OFF,
    block_properties: Properties::new().with_strength(0.3, 1.5)
}
