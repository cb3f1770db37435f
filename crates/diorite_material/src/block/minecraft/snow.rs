use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: SnowBlock,
    id: 80,
    identifier: "snow",
    name: SNOW_BLOCK,
    block_properties: Properties::new()
        .with_strength(0.2, 1.0)
        .requires_correct_tool_for_drops()
}
