use crate::block::behaviour::Properties;

crate::trapdoor_block! {
    variant: WoodenTrapdoor,
    id: 96,
    identifier: "trapdoor",
    name: TRAPDOOR,
    wood: Oak,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .flammable()
}
