use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: DaylightDetectorInverted,
    id: 178,
    identifier: "daylight_detector_inverted",
    name: DAYLIGHT_DETECTOR_INVERTED,
    level: POWER,
    levels: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    block_properties: Properties::new()
        .with_strength(0.2, 1.0)
        .flammable()
}
