use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: AcaciaStairs,
    id: 163,
    identifier: "acacia_stairs",
    name: ACACIA_STAIRS,
    wood: Acacia,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
