use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Mycelium,
    id: 110,
    identifier: "mycelium",
    name: MYCEL,
    block_properties: Properties::new().with_strength(0.6, 3.0)
}
