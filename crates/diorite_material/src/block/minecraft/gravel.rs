use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Gravel,
    id: 13,
    identifier: "gravel",
    name: GRAVEL,
    block_properties: Properties::new().with_strength(0.6, 3.0)
}
