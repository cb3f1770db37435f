use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: CraftingTable,
    id: 58,
    identifier: "crafting_table",
    name: WORKBENCH,
    block_properties: Properties::new()
        .with_strength(2.5, 12.5)
        .flammable()
}
