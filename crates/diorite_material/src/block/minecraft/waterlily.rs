use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: WaterLily,
    id: 111,
    identifier: "waterlily",
    name: WATER_LILY,
    block_properties: Properties::new().instant_break()
}
