use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Clay,
    id: 82,
    identifier: "clay",
    name: CLAY,
    block_properties: Properties::new().with_strength(0.6, 3.0)
}
