use crate::block::behaviour::Properties;

crate::colored_block! {
    variant: Carpet,
    id: 171,
    identifier: "carpet",
    name: CARPET,
    block_properties: Properties::new()
        .with_strength(0.1, 0.5)
        .flammable()
}
