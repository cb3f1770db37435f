use crate::block::behaviour::Properties;

crate::mushroom_block! {
    variant: RedMushroomBlock,
    id: 100,
    identifier: "red_mushroom_block",
    name: RED_MUSHROOM_BLOCK,
    block_properties: Properties::new()
        .with_strength(0.2, 1.0)
        .flammable()
}
