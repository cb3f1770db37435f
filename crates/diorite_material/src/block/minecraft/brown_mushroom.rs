use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: BrownMushroom,
    id: 39,
    identifier: "brown_mushroom",
    name: BROWN_MUSHROOM,
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
        .with_light(1)
}
