use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: DeadBush,
    id: 32,
    identifier: "deadbush",
    name: DEAD_BUSH,
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
        .replaceable()
        .flammable()
}
