use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: Carrot,
    id: 141,
    identifier: "carrots",
    name: CARROT,
    level: AGE,
    levels: [0, 1, 2, 3, 4, 5, 6, 7],
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
