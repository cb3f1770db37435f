use crate::block::behaviour::Properties;

crate::door_block! {
    variant: AcaciaDoor,
    id: 196,
    identifier: "acacia_door",
    name: ACACIA_DOOR,
    wood: Acacia,
    block_properties: Properties::new()
        .with_strength(3.0, 15.0)
        .flammable()
}
