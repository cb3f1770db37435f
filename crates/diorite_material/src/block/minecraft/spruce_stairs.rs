use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: SpruceStairs,
    id: 134,
    identifier: "spruce_stairs",
    name: SPRUCE_WOOD_STAIRS,
    wood: Spruce,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
