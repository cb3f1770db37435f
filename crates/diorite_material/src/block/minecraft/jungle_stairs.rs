use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: JungleStairs,
    id: 136,
    identifier: "jungle_stairs",
    name: JUNGLE_WOOD_STAIRS,
    wood: Jungle,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
