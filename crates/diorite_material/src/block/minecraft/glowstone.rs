use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Glowstone,
    id: 89,
    identifier: "glowstone",
    name: GLOWSTONE,
    block_properties: Properties::new()
        .with_strength(0.3, 1.5)
        .with_light(15)
}
