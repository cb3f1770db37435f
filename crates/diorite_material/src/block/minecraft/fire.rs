use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: Fire,
    id: 51,
    identifier: "fire",
    name: FIRE,
    level: AGE,
    levels: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
        .replaceable()
        .with_light(15)
}
