use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: Potato,
    id: 142,
    identifier: "potatoes",
    name: POTATO,
    level: AGE,
    levels: [0, 1, 2, 3, 4, 5, 6, 7],
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
