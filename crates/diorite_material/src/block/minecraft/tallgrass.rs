use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: LongGrass,
    id: 31,
    identifier: "tallgrass",
    name: LONG_GRASS,
    kinds: {
        DEAD_SHRUB => 0,
        GRASS => 1,
        FERN => 2,
    },
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
        .replaceable()
        .flammable()
}
