use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: PackedIce,
    id: 174,
    identifier: "packed_ice",
    name: PACKED_ICE,
    block_properties: Properties::new().with_strength(0.5, 2.5)
}
