use crate::block::behaviour::Properties;

crate::door_block! {
    variant: BirchDoor,
    id: 194,
    identifier: "birch_door",
    name: BIRCH_DOOR,
    wood: Birch,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .flammable()
}
