use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: Sand,
    id: 12,
    identifier: "sand",
    name: SAND,
    kinds: {
        SAND => 0,
        RED_SAND => 1,
    },
    block_properties: Properties::new().with_strength(0.5, 2.5)
}
