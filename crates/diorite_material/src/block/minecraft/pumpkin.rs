use crate::block::behaviour::Properties;

crate::horizontal_block! {
    variant: Pumpkin,
    id: 86,
    identifier: "pumpkin",
    name: PUMPKIN,
    block_properties: Properties::new().with_strength(1.0, 5.0)
}
