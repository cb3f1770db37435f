use crate::block::behaviour::Properties;

crate::door_block! {
    variant: IronDoor,
    id: 71,
    identifier: "iron_door",
    name: IRON_DOOR,
    block_properties: Properties::new()
        .with_strength(5.0, 25.0)
        .requires_correct_tool_for_drops()
}
