use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: Cactus,
    id: 81,
    identifier: "cactus",
    name: CACTUS,
    level: AGE,
    levels: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    block_properties: Properties::new().with_strength(0.4, 2.0)
}
