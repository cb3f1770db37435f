use crate::block::behaviour::Properties;

crate::colored_block! {
    variant: StainedClay,
    id: 159,
    identifier: "stained_hardened_clay",
    name: STAINED_CLAY,
    block_properties: Properties::new()
        .with_strength(1.25, 21.0)
        .requires_correct_tool_for_drops()
}
