use crate::block::behaviour::Properties;

crate::leaves_block! {
    variant: Leaves1,
    id: 18,
    identifier: "leaves",
    name: LEAVES,
    wood_offset: 0,
    kinds: {
        OAK => 0,
        SPRUCE => 1,
        BIRCH => 2,
        JUNGLE => 3,
    },
    block_properties: Properties::new()
        .with_strength(0.2, 1.0)
        .flammable()
}
