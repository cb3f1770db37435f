use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: DragonEgg,
    id: 122,
    identifier: "dragon_egg",
    name: DRAGON_EGG,
    block_properties: Properties::new()
        .with_strength(3.0, 45.0)
        .with_light(1)
}
