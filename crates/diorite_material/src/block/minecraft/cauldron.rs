use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: Cauldron,
    id: 118,
    identifier: "cauldron",
    name: CAULDRON,
    level: LEVEL,
    levels: [0, 1, 2, 3],
    block_properties: Properties::new()
        .with_strength(2.0, 10.0)
        .requires_correct_tool_for_drops()
}
