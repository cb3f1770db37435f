use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: OakFence,
    id: 85,
    identifier: "fence",
    name: FENCE,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}

crate::impl_wooden!(OakFence, Oak);
