use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: RedSandstone,
    id: 179,
    identifier: "red_sandstone",
    name: RED_SANDSTONE,
    kinds: {
        RED_SANDSTONE => 0,
        CHISELED_RED_SANDSTONE => 1,
        SMOOTH_RED_SANDSTONE => 2,
    },
    block_properties: Properties::new()
        .with_strength(0.8, 4.0)
        .requires_correct_tool_for_drops()
}
