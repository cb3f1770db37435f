use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: Cake,
    id: 92,
    identifier: "cake",
    name: CAKE,
    level: BITES,
    levels: [0, 1, 2, 3, 4, 5, 6],
    block_properties: Properties::new().with_strength(0.5, 2.5)
}
