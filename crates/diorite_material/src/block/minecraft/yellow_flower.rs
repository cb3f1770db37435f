use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: YellowFlower,
    id: 37,
    identifier: "yellow_flower",
    name: YELLOW_FLOWER,
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
