use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: Tnt,
    id: 46,
    identifier: "tnt",
    name: TNT,
    kinds: {
        STABLE => 0,
        UNSTABLE => 1,
    },
    block_properties: Properties::new()
        .instant_break()
        .flammable()
}
