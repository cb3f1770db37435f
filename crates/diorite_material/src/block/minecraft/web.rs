use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Web,
    id: 30,
    identifier: "web",
    name: WEB,
    block_properties: Properties::new()
        .with_strength(4.0, 20.0)
        .no_collision()
        .requires_correct_tool_for_drops()
}
