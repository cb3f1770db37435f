use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: PumpkinStem,
    id: 104,
    identifier: "pumpkin_stem",
    name: PUMPKIN_STEM,
    level: AGE,
    levels: [0, 1, 2, 3, 4, 5, 6, 7],
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
