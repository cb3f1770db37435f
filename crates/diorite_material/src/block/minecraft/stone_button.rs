use crate::block::behaviour::Properties;

crate::button_block! {
    variant: StoneButton,
    id: 77,
    identifier: "stone_button",
    name: STONE_BUTTON,
    block_properties: Properties::new()
        .with_strength(0.5, 2.5)
        .no_collision()
}
