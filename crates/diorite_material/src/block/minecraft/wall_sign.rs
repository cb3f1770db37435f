use crate::block::behaviour::Properties;

crate::wall_block! {
    variant: WallSign,
    id: 68,
    identifier: "wall_sign",
    name: WALL_SIGN,
    block_properties: Properties::new()
        .with_strength(1.0, 5.0)
        .no_collision()
        .flammable()
}
