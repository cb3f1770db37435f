use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Glass,
    id: 20,
    identifier: "glass",
    name: GLASS,
    block_properties: Properties::new().with_strength(0.3, 1.5)
}
