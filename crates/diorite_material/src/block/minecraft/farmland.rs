use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: Farmland,
    id: 60,
    identifier: "farmland",
    name: FARMLAND,
    level: MOISTURE,
    levels: [0, 1, 2, 3, 4, 5, 6, 7],
    block_properties: Properties::new().with_strength(0.6, 3.0)
}
