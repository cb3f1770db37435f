use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: Prismarine,
    id: 168,
    identifier: "prismarine",
    name: PRISMARINE,
    kinds: {
        PRISMARINE => 0,
        PRISMARINE_BRICKS => 1,
        DARK_PRISMARINE => 2,
    },
    block_properties: Properties::new()
        .with_strength(1.5, 30.0)
        .requires_correct_tool_for_drops()
}
