use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: StoneBrick,
    id: 98,
    identifier: "stonebrick",
    name: STONE_BRICK,
    kinds: {
        STONE_BRICK => 0,
        MOSSY_STONE_BRICK => 1,
        CRACKED_STONE_BRICK => 2,
        CHISELED_STONE_BRICK => 3,
    },
    block_properties: Properties::new()
        .with_strength(1.5, 30.0)
        .requires_correct_tool_for_drops()
}
