use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: EndPortal,
    id: 119,
    identifier: "end_portal",
    name: ENDER_PORTAL,
    block_properties: Properties::new()
        .unbreakable()
        .no_collision()
        .with_light(15)
}
