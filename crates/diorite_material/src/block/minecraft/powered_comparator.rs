use crate::block::behaviour::Properties;

crate::comparator_block! {
    variant: PoweredComparator,
    id: 150,
    identifier: "powered_comparator",
    name: POWERED_COMPARATOR,
    block_properties: Properties::new()
        .instant_break()
        .with_light(9)
}
