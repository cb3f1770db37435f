use crate::block::behaviour::Properties;

crate::powered_rail_block! {
    variant: PoweredRail,
    id: 27,
    identifier: "golden_rail",
    name: GOLDEN_RAIL,
    block_properties: Properties::new()
        .with_strength(0.7, 3.5)
        .no_collision()
}
