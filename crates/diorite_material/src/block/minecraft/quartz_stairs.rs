use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: QuartzStairs,
    id: 156,
    identifier: "quartz_stairs",
    name: QUARTZ_STAIRS,
    block_properties: Properties::new()
        .with_strength(0.8, 4.0)
        .requires_correct_tool_for_drops()
}
