use crate::block::behaviour::Properties;

crate::powered_rail_block! {
    variant: DetectorRail,
    id: 28,
    identifier: "detector_rail",
    name: DETECTOR_RAIL,
    block_properties: Properties::new()
        .with_strength(0.7, 3.5)
        .no_collision()
}
