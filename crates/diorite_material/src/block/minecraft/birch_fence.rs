use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: BirchFence,
    id: 189,
    identifier: "birch_fence",
    name: BIRCH_FENCE,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}

crate::impl_wooden!(BirchFence, Birch);
