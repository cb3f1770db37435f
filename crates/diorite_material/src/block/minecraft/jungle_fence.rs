use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: JungleFence,
    id: 190,
    identifier: "jungle_fence",
    name: JUNGLE_FENCE,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}

crate::impl_wooden!(JungleFence, Jungle);
