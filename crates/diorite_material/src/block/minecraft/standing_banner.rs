use crate::block::behaviour::Properties;

crate::rotation_block! {
    variant: StandingBanner,
    id: 176,
    identifier: "standing_banner",
    name: STANDING_BANNER,
    block_properties: Properties::new()
        .with_strength(1.0, 5.0)
        .no_collision()
        .flammable()
}
