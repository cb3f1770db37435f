use crate::block::behaviour::Properties;

crate::wall_block! {
    variant: Chest,
    id: 54,
    identifier: "chest",
    name: CHEST,
    block_properties: Properties::new()
        .with_strength(2.5, 12.5)
        .flammable()
}
