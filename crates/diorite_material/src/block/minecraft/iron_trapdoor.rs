use crate::block::behaviour::Properties;

crate::trapdoor_block! {
    variant: IronTrapdoor,
    id: 167,
    identifier: "iron_trapdoor",
    name: IRON_TRAPDOOR,
    block_properties: Properties::new()
        .with_strength(5.0, 25.0)
        .requires_correct_tool_for_drops()
}
