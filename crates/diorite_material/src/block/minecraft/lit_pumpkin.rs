use crate::block::behaviour::Properties;

crate::horizontal_block! {
    variant: JackOLantern,
    id: 91,
    identifier: "lit_pumpkin",
    name: JACK_O_LANTERN,
    block_properties: Properties::new()
        .with_strength(1.0, 5.0)
        .with_light(15)
}
