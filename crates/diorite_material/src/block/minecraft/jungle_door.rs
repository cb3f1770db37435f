use crate::block::behaviour::Properties;

crate::door_block! {
    variant: JungleDoor,
    id: 195,
    identifier: "jungle_door",
    name: JUNGLE_DOOR,
    wood: Jungle,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .flammable()
}
