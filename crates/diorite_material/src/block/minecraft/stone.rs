use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: Stone,
    id: 1,
    identifier: "stone",
    name: STONE,
    kinds: {
        STONE => 0,
        GRANITE => 1,
        POLISHED_GRANITE => 2,
        DIORITE => 3,
        POLISHED_DIORITE => 4,
        ANDESITE => 5,
        POLISHED_ANDESITE => 6,
    },
    block_properties: Properties::new()
        .with_strength(1.5, 30.0)
        .requires_correct_tool_for_drops()
}
