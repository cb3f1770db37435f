use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: SoulSand,
    id: 88,
    identifier: "soul_sand",
    name: SOUL_SAND,
    block_properties: Properties::new().with_strength(0.5, 2.5)
}
