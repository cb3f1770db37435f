use crate::block::behaviour::Properties;

crate::leaves_block! {
    variant: Leaves2,
    id: 161,
    identifier: "leaves2",
    name: LEAVES_2,
    wood_offset: 4,
    kinds: {
        ACACIA => 0,
        DARK_OAK => 1,
    },
    block_properties: Properties::new()
        .with_strength(0.2, 1.0)
        .flammable()
}
