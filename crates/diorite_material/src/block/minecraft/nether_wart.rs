use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: NetherWart,
    id: 115,
    identifier: "nether_wart",
    name: NETHER_WARTS,
    level: AGE,
    levels: [0, 1, 2, 3],
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
