use crate::block::behaviour::Properties;

crate::repeater_block! {
    variant: UnpoweredRepeater,
    id: 93,
    identifier: "unpowered_repeater",
    name: UNPOWERED_REPEATER,
    block_properties: Properties::new().instant_break()
}
