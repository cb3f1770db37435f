use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: MelonStem,
    id: 105,
    identifier: "melon_stem",
    name: MELON_STEM,
    level: AGE,
    levels: [0, 1, 2, 3, 4, 5, 6, 7],
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
