use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: OakStairs,
    id: 53,
    identifier: "oak_stairs",
    name: OAK_STAIRS,
    wood: Oak,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
