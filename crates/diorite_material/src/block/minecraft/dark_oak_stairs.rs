use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: DarkOakStairs,
    id: 164,
    identifier: "dark_oak_stairs",
    name: DARK_OAK_STAIRS,
    wood: DarkOak,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
