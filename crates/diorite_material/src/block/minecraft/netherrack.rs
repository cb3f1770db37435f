use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Netherrack,
    id: 87,
    identifier: "netherrack",
    name: NETHERRACK,
    block_properties: Properties::new()
        .with_strength(0.4, 2.0)
        .requires_correct_tool_for_drops()
}
