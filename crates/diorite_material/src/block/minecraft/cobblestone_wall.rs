use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: CobblestoneWall,
    id: 139,
    identifier: "cobblestone_wall",
    name: COBBLE_WALL,
    kinds: {
        COBBLESTONE => 0,
        MOSSY_COBBLESTONE => 1,
    },
    block_properties: Properties::new()
        .with_strength(2.0, 30.0)
        .requires_correct_tool_for_drops()
}
