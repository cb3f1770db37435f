use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: Jukebox,
    id: 84,
    identifier: "jukebox",
    name: JUKEBOX,
    kinds: {
        EMPTY => 0,
        WITH_RECORD => 1,
    },
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .flammable()
}
