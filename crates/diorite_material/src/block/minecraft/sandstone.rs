use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: Sandstone,
    id: 24,
    identifier: "sandstone",
    name: SANDSTONE,
    kinds: {
        SANDSTONE => 0,
        CHISELED_SANDSTONE => 1,
        SMOOTH_SANDSTONE => 2,
    },
    block_properties: Properties::new()
        .with_strength(0.8, 4.0)
        .requires_correct_tool_for_drops()
}
