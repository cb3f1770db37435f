use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: IronBars,
    id: 101,
    identifier: "iron_bars",
    name: IRON_BARS,
    block_properties: Properties::new()
        .with_strength(5.0, 30.0)
        .requires_correct_tool_for_drops()
}
