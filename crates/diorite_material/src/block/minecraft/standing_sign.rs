use crate::block::behaviour::Properties;

crate::rotation_block! {
    variant: SignPost,
    id: 63,
    identifier: "standing_sign",
    name: SIGN_POST,
    block_properties: Properties::new()
        .with_strength(1.0, 5.0)
        .no_collision()
        .flammable()
}
