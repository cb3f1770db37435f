use crate::block::behaviour::Properties;

crate::door_block! {
    variant: OakDoor,
    id: 64,
    identifier: "wooden_door",
    name: OAK_DOOR,
    wood: Oak,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .flammable()
}
