use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: SlimeBlock,
    id: 165,
    identifier: "slime",
    name: SLIME_BLOCK,
    block_properties: Properties::new().instant_break()
}
