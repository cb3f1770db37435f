use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: IronBlock,
    id: 42,
    identifier: "iron_block",
    name: IRON_BLOCK,
    block_properties: Properties::new()
        .with_strength(5.0, 30.0)
        .requires_correct_tool_for_drops()
}
