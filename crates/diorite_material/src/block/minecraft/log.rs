use crate::block::behaviour::Properties;

crate::log_block! {
    variant: Log1,
    id: 17,
    identifier: "log",
    name: LOG,
    wood_offset: 0,
    kinds: {
        OAK => 0,
        SPRUCE => 1,
        BIRCH => 2,
        JUNGLE => 3,
    },
    block_properties: Properties::new()
        .with_strength(2.0, 10.0)
        .flammable()
}
