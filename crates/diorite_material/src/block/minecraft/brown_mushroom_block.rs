use crate::block::behaviour::Properties;

crate::mushroom_block! {
    variant: BrownMushroomBlock,
    id: 99,
    identifier: "brown_mushroom_block",
    name: BROWN_MUSHROOM_BLOCK,
    block_properties: Properties::new()
        .with_strength(0.2, 1.0)
        .flammable()
}
