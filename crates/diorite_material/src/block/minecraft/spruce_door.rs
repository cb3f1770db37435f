use crate::block::behaviour::Properties;

crate::door_block! {
    variant: SpruceDoor,
    id: 193,
    identifier: "spruce_door",
    name: SPRUCE_DOOR,
    wood: Spruce,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .flammable()
}
