use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: AcaciaFence,
    id: 192,
    identifier: "acacia_fence",
    name: ACACIA_FENCE,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}

crate::impl_wooden!(AcaciaFence, Acacia);
