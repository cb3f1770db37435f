use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: DarkOakFence,
    id: 191,
    identifier: "dark_oak_fence",
    name: DARK_OAK_FENCE,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}

crate::impl_wooden!(DarkOakFence, DarkOak);
