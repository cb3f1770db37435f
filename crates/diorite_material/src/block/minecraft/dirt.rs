use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: Dirt,
    id: 3,
    identifier: "dirt",
    name: DIRT,
    kinds: {
        DIRT => 0,
        COARSE_DIRT => 1,
        PODZOL => 2,
    },
    block_properties: Properties::new().with_strength(0.5, 2.5)
}
