use crate::block::behaviour::Properties;

crate::comparator_block! {
    variant: UnpoweredComparator,
    id: 149,
    identifier: "unpowered_comparator",
    name: UNPOWERED_COMPARATOR,
    block_properties: Properties::new().instant_break()
}
