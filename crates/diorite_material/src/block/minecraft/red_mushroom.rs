use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: RedMushroom,
    id: 40,
    identifier: "red_mushroom",
    name: RED_MUSHROOM,
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
