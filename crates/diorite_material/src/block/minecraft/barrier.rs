use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Barrier,
    id: 166,
    identifier: "barrier",
    name: BARRIER,
    block_properties: Properties::new().unbreakable()
}
