use crate::block::behaviour::Properties;

crate::wall_block! {
    variant: Ladder,
    id: 65,
    identifier: "ladder",
    name: LADDER,
    block_properties: Properties::new().with_strength(0.4, 2.0)
}
