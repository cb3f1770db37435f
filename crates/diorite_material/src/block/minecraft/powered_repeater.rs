use crate::block::behaviour::Properties;

crate::repeater_block! {
    variant: PoweredRepeater,
    id: 94,
    identifier: "powered_repeater",
    name: POWERED_REPEATER,
    block_properties: Properties::new()
        .instant_break()
        .with_light(9)
}
