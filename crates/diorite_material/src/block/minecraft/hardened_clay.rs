use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: HardenedClay,
    id: 172,
    identifier: "hardened_clay",
    name: HARD_CLAY,
    block_properties: Properties::new()
        .with_strength(1.25, 21.0)
        .requires_correct_tool_for_drops()
}
