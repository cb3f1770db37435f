use crate::block::behaviour::Properties;

crate::stairs_block! {
    variant: CobblestoneStairs,
    id: 67,
    identifier: "stone_stairs",
    name: COBBLESTONE_STAIRS,
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
