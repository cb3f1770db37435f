use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: EnchantingTable,
    id: 116,
    identifier: "enchanting_table",
    name: ENCHANTMENT_TABLE,
    block_properties: Properties::new()
        .with_strength(5.0, 6000.0)
        .requires_correct_tool_for_drops()
}
