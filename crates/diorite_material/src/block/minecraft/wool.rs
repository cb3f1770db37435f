use crate::block::behaviour::Properties;

crate::colored_block! {
    variant: Wool,
    id: 35,
    identifier: "wool",
    name: WOOL,
    block_properties: Properties::new()
        .with_strength(0.8, 4.0)
        .flammable()
}
