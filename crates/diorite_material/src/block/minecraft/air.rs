use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Air,
    id: 0,
    identifier: "air",
    name: AIR,
    block_properties: Properties::new().air()
}
