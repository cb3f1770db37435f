use crate::block::behaviour::Properties;

crate::rail_block! {
    variant: RegularRail,
    id: 66,
    identifier: "rail",
    name: RAIL,
    block_properties: Properties::new()
        .with_strength(0.7, 3.5)
        .no_collision()
}
