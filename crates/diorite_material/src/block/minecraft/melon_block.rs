use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: MelonBlock,
    id: 103,
    identifier: "melon_block",
    name: MELON_BLOCK,
    block_properties: Properties::new().with_strength(1.0, 5.0)
}
