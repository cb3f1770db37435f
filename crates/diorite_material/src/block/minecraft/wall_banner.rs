use crate::block::behaviour::Properties;

crate::wall_block! {
    variant: WallBanner,
    id: 177,
    identifier: "wall_banner",
    name: WALL_BANNER,
    block_properties: Properties::new()
        .with_strength(1.0, 5.0)
        .no_collision()
        .flammable()
}
