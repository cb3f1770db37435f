use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: Wheat,
    id: 59,
    identifier: "wheat",
    name: WHEAT,
    level: AGE,
    levels: [0, 1, 2, 3, 4, 5, 6, 7],
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
