use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: SpruceFence,
    id: 188,
    identifier: "spruce_fence",
    name: SPRUCE_FENCE,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}

crate::impl_wooden!(SpruceFence, Spruce);
