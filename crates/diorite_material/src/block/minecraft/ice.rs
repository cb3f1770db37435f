use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Ice,
    id: 79,
    identifier: "ice",
    name: ICE,
    block_properties: Properties::new().with_strength(0.5, 2.5)
}
