use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: BirchStairs,
    id: 135,
    identifier: "birch_stairs",
    name: BIRCH_WOOD_STAIRS,
    wood: Birch,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
