use crate::block::behaviour::Properties;

crate::powered_rail_block! {
    variant: ActivatorRail,
    id: 157,
    identifier: "activator_rail",
    name: ACTIVATOR_RAIL,
    block_properties: Properties::new()
        .with_strength(0.7, 3.5)
        .no_collision()
}
