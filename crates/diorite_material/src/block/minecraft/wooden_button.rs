use crate::block::behaviour::Properties;

crate::button_block! {
    variant: WoodenButton,
    id: 143,
    identifier: "wooden_button",
    name: WOOD_BUTTON,
    block_properties: Properties::new()
        .with_strength(0.5, 2.5)
        .no_collision()
        .flammable()
}

crate::impl_wooden!(WoodenButton, Oak);
