use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: Sponge,
    id: 19,
    identifier: "sponge",
    name: SPONGE,
    kinds: {
        SPONGE => 0,
        WET_SPONGE => 1,
    },
    block_properties: Properties::new().with_strength(0.6, 3.0)
}
