use crate::block::behaviour::Properties;

crate::door_block! {
    variant: DarkOakDoor,
    id: 197,
    identifier: "dark_oak_door",
    name: DARK_OAK_DOOR,
    wood: DarkOak,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .flammable()
}
